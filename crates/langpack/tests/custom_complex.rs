//! Tests for user-defined complex values and the loader registry.

use langpack::{
    Complex, DefinitionWalker, FieldFormatter, LangArg, LangPack, Language, ScopePath, Section,
    StringPool, PoolMode, args,
};

/// A toy complex value: renders its text upper-cased.
#[derive(Debug, Clone)]
struct Shout {
    text: String,
}

impl Complex for Shout {
    fn type_name(&self) -> &str {
        "shout"
    }

    fn needs_walk(&self, formatter: &dyn FieldFormatter) -> bool {
        formatter.needs_walk(&self.text)
    }

    fn walk(&self, walker: &mut dyn DefinitionWalker) -> Box<dyn Complex> {
        Box::new(Shout {
            text: walker.walk_string(&self.text),
        })
    }

    fn process(
        &self,
        pack: &LangPack,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String {
        pack.processor()
            .process(&self.get(), pack, language, context, args, depth)
    }

    fn get(&self) -> String {
        self.text.to_uppercase()
    }

    fn clone_box(&self) -> Box<dyn Complex> {
        Box::new(self.clone())
    }
}

fn load_shout(section: &Section) -> Box<dyn Complex> {
    Box::new(Shout {
        text: section.get_string("text").unwrap_or_default(),
    })
}

// =========================================================================
// Registry
// =========================================================================

#[test]
fn test_register_and_unregister() {
    let mut pack = LangPack::builder().dir(".").build();
    assert!(pack.contains_loader("pool"));
    assert!(!pack.contains_loader("shout"));

    pack.register_loader("Shout", load_shout);
    assert!(pack.contains_loader("shout"));
    assert!(pack.loader("SHOUT").is_some());

    assert!(pack.unregister_loader("shout"));
    assert!(!pack.unregister_loader("shout"));
}

// =========================================================================
// Loading and processing
// =========================================================================

#[test]
fn test_custom_type_loads_from_document() {
    let mut pack = LangPack::builder().dir(".").build();
    pack.register_loader("shout", load_shout);
    pack.append_str(Language::English, "alert:\n  type: shout\n  text: danger ahead\n")
        .unwrap();

    assert!(pack.is_complex(Language::English, "alert"));
    assert_eq!(
        pack.get_string("alert", Language::English, None, &args![]),
        Some("DANGER AHEAD".to_string())
    );
}

#[test]
fn test_custom_type_participates_in_walk() {
    let mut pack = LangPack::builder().dir(".").build();
    pack.register_loader("shout", load_shout);
    pack.append_str(
        Language::English,
        "brand: acme\nalert:\n  type: shout\n  text: \"%!brand% alert\"\n",
    )
    .unwrap();

    assert_eq!(
        pack.get_string("alert", Language::English, None, &args![]),
        Some("ACME ALERT".to_string())
    );
}

#[test]
fn test_set_complex_directly() {
    let mut pack = LangPack::builder().dir(".").build();
    let pool = StringPool::new(
        PoolMode::Sequential,
        vec!["one".to_string(), "two".to_string()],
    );
    pack.set_complex(Language::English, "runtime.pool", Box::new(pool));

    assert!(pack.is_complex(Language::English, "runtime.pool"));
    assert_eq!(
        pack.get_string("runtime.pool", Language::English, None, &args![]),
        Some("one".to_string())
    );
    assert_eq!(
        pack.get_string("runtime.pool", Language::English, None, &args![]),
        Some("two".to_string())
    );
}
