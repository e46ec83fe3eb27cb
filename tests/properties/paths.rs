//! Property tests for output path resolution.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use splinter::application::split::default_output_dir;
use splinter::packager::archive_path;

fn file_stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the default output directory never equals the input path.
    #[test]
    fn property_output_dir_differs_from_input(stem in file_stem(), ext in proptest::option::of("[a-z]{1,5}")) {
        let input = match &ext {
            Some(ext) => PathBuf::from(format!("pages/{stem}.{ext}")),
            None => PathBuf::from(format!("pages/{stem}")),
        };
        let output = default_output_dir(&input);
        prop_assert_ne!(&output, &input);
        prop_assert_eq!(output.parent(), Some(Path::new("pages")));
    }

    /// PROPERTY: the archive sits beside the directory with `.zip` appended.
    #[test]
    fn property_archive_appends_zip(stem in file_stem(), ext in proptest::option::of("[a-z]{1,5}")) {
        let dir = match &ext {
            Some(ext) => PathBuf::from(format!("out/{stem}.{ext}")),
            None => PathBuf::from(format!("out/{stem}")),
        };
        let archive = archive_path(&dir);
        let expected = format!("{}.zip", dir.display());
        let archive_str = archive.to_string_lossy();
        prop_assert_eq!(archive_str.as_ref(), expected.as_str());
    }

    /// PROPERTY: the archive is never written inside the directory it packs.
    #[test]
    fn property_archive_is_outside_dir(parts in proptest::collection::vec(prop_oneof![
        3 => file_stem(),
        1 => Just(".".to_string()),
    ], 1..5)) {
        let dir: PathBuf = std::iter::once("out".to_string()).chain(parts).collect();
        let archive = archive_path(&dir);
        let packed = splinter::emitter::normalize_dir(&dir);
        prop_assert!(!archive.starts_with(&packed));
        prop_assert_eq!(archive.parent(), packed.parent());
    }
}
