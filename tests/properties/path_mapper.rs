//! Property tests for output path mapping.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use sass_guard::{map_output_path, normalize, CompileOptions};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn relative_dir() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=4)
}

fn stylesheet_ext() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("scss"), Just("sass")]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: mirrored outputs keep the input's directories under the output dir.
    #[test]
    fn property_mirror_preserves_directories(
        dirs in relative_dir(),
        stem in segment(),
        ext in stylesheet_ext(),
    ) {
        let mut input = PathBuf::new();
        input.extend(&dirs);
        input.push(format!("{}.{}", stem, ext));
        let options = CompileOptions::new().with_output_dir("css").with_extension(".css");

        let output = map_output_path(&input, &options);

        let mut expected = PathBuf::from("css");
        expected.extend(&dirs);
        expected.push(format!("{}.css", stem));
        prop_assert_eq!(output, expected);
    }

    /// PROPERTY: shallow outputs always sit directly in the output dir.
    #[test]
    fn property_shallow_is_flat(
        dirs in relative_dir(),
        stem in segment(),
        ext in stylesheet_ext(),
    ) {
        let mut input = PathBuf::new();
        input.extend(&dirs);
        input.push(format!("{}.{}", stem, ext));
        let options = CompileOptions::new()
            .with_output_dir("public/css")
            .with_extension("css")
            .with_shallow(true);

        let output = map_output_path(&input, &options);

        prop_assert_eq!(output.parent(), Some(Path::new("public/css")));
        prop_assert_eq!(output.file_name().unwrap().to_string_lossy(), format!("{}.css", stem));
    }

    /// PROPERTY: the input root never appears in the mapped output.
    #[test]
    fn property_input_root_is_stripped(
        dirs in relative_dir(),
        stem in segment(),
    ) {
        let mut input = PathBuf::from("sass");
        input.extend(&dirs);
        input.push(format!("{}.scss", stem));
        let options = CompileOptions::new().with_output_dir("css").with_input_root("sass");

        let output = map_output_path(&input, &options);

        let mut expected = PathBuf::from("css");
        expected.extend(&dirs);
        expected.push(format!("{}.css", stem));
        prop_assert_eq!(output, expected);
    }

    /// PROPERTY: normalization is idempotent and never panics.
    #[test]
    fn property_normalize_idempotent(
        s in "[a-z./]{0,48}"
    ) {
        let once = normalize(Path::new(&s));
        prop_assert_eq!(normalize(&once), once.clone());
    }

    /// PROPERTY: `dir/..` segments fold away.
    #[test]
    fn property_normalize_folds_parent_segments(
        dirs in relative_dir(),
        detour in segment(),
        stem in segment(),
    ) {
        let mut plain = PathBuf::new();
        plain.extend(&dirs);
        plain.push(format!("{}.scss", stem));

        let mut detoured = PathBuf::from(".");
        detoured.extend(&dirs);
        detoured.push(&detour);
        detoured.push("..");
        detoured.push(format!("{}.scss", stem));

        prop_assert_eq!(normalize(&detoured), plain);
    }
}
