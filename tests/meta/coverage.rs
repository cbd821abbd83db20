//! Keeps `tests/unit` in step with `src`
//!
//! Each `src/<area>/<leaf>.rs` has a `tests/unit/<area>/<leaf>.rs` mirror,
//! declared from `tests/unit/<area>/mod.rs`, whose area is in turn declared
//! from the `tests/unit/main.rs` harness.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";
    const TESTS: &str = "tests";
    const HARNESS: &str = "main.rs";
    const AREA_MODULE: &str = "mod.rs";

    fn subdirectories(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    // Stems of the non-module `.rs` files directly inside `dir`
    fn leaves(dir: &Path) -> io::Result<BTreeSet<String>> {
        let mut stems = BTreeSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
                && stem != "mod"
            {
                stems.insert(stem.to_string());
            }
        }
        Ok(stems)
    }

    // `<area>/<leaf>` for every leaf below the areas of `root`
    fn area_leaves(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        for area in subdirectories(root)? {
            for leaf in leaves(&root.join(&area))? {
                found.insert(format!("{area}/{leaf}"));
            }
        }
        Ok(found)
    }

    fn declared_modules(file: &Path) -> io::Result<BTreeSet<String>> {
        let content = fs::read_to_string(file)?;
        let modules = content
            .lines()
            .filter_map(|line| line.trim().strip_prefix("mod ")?.strip_suffix(';'))
            .map(str::to_string)
            .collect();
        Ok(modules)
    }

    fn listing<'a>(entries: impl IntoIterator<Item = &'a String>, root: &str) -> String {
        entries
            .into_iter()
            .map(|entry| format!("  - {root}/{entry}.rs"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_src_leaf_has_unit_tests() -> io::Result<()> {
        let src = area_leaves(Path::new(SRC))?;
        let unit = area_leaves(Path::new(UNIT))?;
        let missing: Vec<_> = src.difference(&unit).collect();

        assert!(
            missing.is_empty(),
            "Source files without a unit test mirror:\n{}",
            listing(missing, UNIT)
        );
        Ok(())
    }

    #[test]
    fn test_every_unit_file_has_src_counterpart() -> io::Result<()> {
        let src = area_leaves(Path::new(SRC))?;
        let unit = area_leaves(Path::new(UNIT))?;
        let orphaned: Vec<_> = unit.difference(&src).collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files whose source file is gone:\n{}",
            listing(orphaned, UNIT)
        );
        Ok(())
    }

    // Undeclared files are silently skipped by the compiler
    #[test]
    fn test_harness_declares_every_area() -> io::Result<()> {
        let unit = Path::new(UNIT);
        let areas = subdirectories(Path::new(SRC))?;

        assert_eq!(declared_modules(&unit.join(HARNESS))?, areas);
        for area in &areas {
            let declared = declared_modules(&unit.join(area).join(AREA_MODULE))?;
            assert_eq!(declared, leaves(&unit.join(area))?, "in {UNIT}/{area}/{AREA_MODULE}");
        }
        Ok(())
    }

    #[test]
    fn test_unit_files_contain_gated_tests() -> io::Result<()> {
        let mut without_tests = Vec::new();
        for entry in area_leaves(Path::new(UNIT))? {
            let content = fs::read_to_string(Path::new(UNIT).join(format!("{entry}.rs")))?;
            if !content.contains("#[cfg(test)]\nmod tests {") || !content.contains("#[test]") {
                without_tests.push(entry);
            }
        }

        assert!(
            without_tests.is_empty(),
            "Unit test files without a gated `tests` module:\n{}",
            listing(&without_tests, UNIT)
        );
        Ok(())
    }

    // Each directory under `tests/` is a test crate rooted at its `main.rs`;
    // loose files at the top level are integration tests in their own right
    #[test]
    fn test_integration_crates_are_rooted() -> io::Result<()> {
        let tests = Path::new(TESTS);
        for dir in subdirectories(tests)? {
            assert!(
                tests.join(&dir).join(HARNESS).is_file(),
                "{TESTS}/{dir} has no {HARNESS}"
            );
        }
        for stem in leaves(tests)? {
            let content = fs::read_to_string(tests.join(format!("{stem}.rs")))?;
            assert!(content.contains("#[test]"), "{TESTS}/{stem}.rs has no tests");
        }
        Ok(())
    }
}
