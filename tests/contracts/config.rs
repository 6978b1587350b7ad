//! Options contracts
//!
//! - Later layers override earlier ones, field by field
//! - Unknown keys warn instead of failing
//! - Nullable options can be cleared from TOML

use std::path::Path;

use dropmenu::config::{load_with_warnings, user_options_path, Options, OptionsPatch};
use dropmenu::infrastructure::SourceDocument;
use dropmenu::presentation::{prepare_instance, terminal_defaults};

use crate::common::*;

mod precedence {
    use super::*;

    /// CONTRACT: defaults < user file < source options
    #[test]
    fn contract_source_beats_user_beats_defaults() {
        let env = TestEnv::new();
        env.write_options("speed = 400\nmargin = 5.0\ntoggle_text = \"Pick one\"\n");
        let source = env.write("menu.toml", SELECT_SOURCE);

        let prepared = prepare_instance(Some(&env.path("options.toml")), &source, None)
            .expect("instance prepares");
        let dropdown = prepared.builder.build();

        assert_eq!(dropdown.options().speed, 0, "source sets speed = 0");
        assert_eq!(dropdown.options().margin, 5.0, "user file sets margin");
        assert_eq!(dropdown.options().toggle_text, "Pick one");
        assert_eq!(dropdown.options().easing, Options::default().easing);
    }

    /// CONTRACT: host defaults sit below the user file
    #[test]
    fn contract_host_defaults_are_lowest() {
        let env = TestEnv::new();
        let source = env.write("menu.toml", SELECT_SOURCE);

        let prepared = prepare_instance(
            Some(&env.path("options.toml")),
            &source,
            Some(&terminal_defaults()),
        )
        .expect("instance prepares");
        assert_eq!(prepared.builder.build().options().margin, 1.0);

        env.write_options("margin = 3.0\n");
        let prepared = prepare_instance(
            Some(&env.path("options.toml")),
            &source,
            Some(&terminal_defaults()),
        )
        .expect("instance prepares");
        assert_eq!(prepared.builder.build().options().margin, 3.0);
    }

    /// CONTRACT: an unset field never clobbers a lower layer
    #[test]
    fn contract_empty_patch_changes_nothing() {
        let base = OptionsPatch {
            speed: Some(50),
            max_select: Some(Some(2)),
            ..OptionsPatch::default()
        };
        let options = Options::layered([&base, &OptionsPatch::default()]);

        assert_eq!(options.speed, 50);
        assert_eq!(options.max_select, Some(2));
    }

    /// CONTRACT: an explicit options path wins over discovery
    #[test]
    fn contract_explicit_path_wins() {
        let explicit = Path::new("/tmp/explicit-options.toml");
        assert_eq!(user_options_path(Some(explicit)).as_deref(), Some(explicit));
    }
}

mod warnings {
    use super::*;

    /// CONTRACT: unknown keys produce warnings, never errors
    #[test]
    fn contract_unknown_keys_warn() {
        let env = TestEnv::new();
        env.write_options("speed = 10\nmulit = true\n");

        let (patch, warnings) =
            load_with_warnings(&env.path("options.toml")).expect("unknown keys are not fatal");

        assert_eq!(patch.speed, Some(10));
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "mulit");
        assert_eq!(warnings[0].line, Some(2));
        assert_eq!(warnings[0].suggestion.as_deref(), Some("multi"));
    }

    /// CONTRACT: unknown keys inside a source document warn with their path
    #[test]
    fn contract_source_unknown_keys_warn() {
        let content = "[options]\nspeeed = 1\n\n[list]\nitems = [{ text = \"One\" }]\n";
        let (document, warnings) =
            SourceDocument::parse(Path::new("menu.toml"), content).expect("parses");

        assert!(document.list.is_some());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].path, "options.speeed");
        assert_eq!(warnings[0].suggestion.as_deref(), Some("speed"));
    }

    /// CONTRACT: a malformed file is an error naming the file
    #[test]
    fn contract_invalid_toml_names_file() {
        let env = TestEnv::new();
        env.write_options("speed = [\n");

        let err = load_with_warnings(&env.path("options.toml")).unwrap_err();
        assert!(err.to_string().contains("options.toml"), "got: {}", err);
    }
}

mod nullable {
    use super::*;

    /// CONTRACT: `false` clears a limit and `"auto"` clears a flag
    #[test]
    fn contract_toml_clears_nullable_options() {
        let env = TestEnv::new();
        env.write_options("auto_resize = false\nmax_select = false\nmulti = \"auto\"\nauto_close_link = \"auto\"\n");

        let (patch, warnings) = load_with_warnings(&env.path("options.toml")).expect("parses");
        assert!(warnings.is_empty());

        let options = Options::layered([&patch]);
        assert_eq!(options.auto_resize, None);
        assert_eq!(options.max_select, None);
        assert_eq!(options.multi, None);
        assert_eq!(options.auto_close_link, None);
    }

    /// CONTRACT: JSON options accept null for the same fields
    #[test]
    fn contract_json_null_clears_nullable_options() {
        let env = TestEnv::new();
        let path = env.write("options.json", r#"{ "auto_resize": null, "max_select": 3 }"#);

        let (patch, _) = load_with_warnings(&path).expect("parses");
        let options = Options::layered([&patch]);

        assert_eq!(options.auto_resize, None);
        assert_eq!(options.max_select, Some(3));
    }
}
