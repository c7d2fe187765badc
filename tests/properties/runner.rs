//! Property tests for runner batch accounting.

use std::path::PathBuf;

use proptest::prelude::*;

use sass_guard::{CompileOptions, Runner, SyntaxError};

use crate::common::*;

/// A batch of distinct inputs, each flagged to fail or not
fn batch() -> impl Strategy<Value = Vec<(String, bool)>> {
    proptest::collection::btree_map("[a-z]{1,8}", any::<bool>(), 0..12)
        .prop_map(|m| m.into_iter().map(|(name, fails)| (format!("{}.scss", name), fails)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: outputs == successes and all_succeeded == no failures,
    /// with exactly one event per input.
    #[test]
    fn property_run_accounting(files in batch()) {
        let mut engine = FakeEngine::default();
        for (name, fails) in &files {
            if *fails {
                engine = engine.failing(name, SyntaxError::new("Invalid CSS", name.as_str()));
            }
        }
        let recorder = Recorder::default();
        let options = CompileOptions::new().with_output_dir("css");
        let runner = Runner::new(engine, MemoryFs::default(), &recorder, options);
        let changed: Vec<PathBuf> = files.iter().map(|(n, _)| PathBuf::from(n)).collect();

        let report = runner.run(&changed);

        let failures = files.iter().filter(|(_, f)| *f).count();
        prop_assert_eq!(report.outputs().len(), files.len() - failures);
        prop_assert_eq!(report.all_succeeded(), failures == 0);
        prop_assert_eq!(recorder.successes(), files.len() - failures);
        prop_assert_eq!(recorder.errors().len(), failures);
        prop_assert_eq!(recorder.events().len(), files.len());
    }

    /// PROPERTY: owners is an order-preserving subsequence of the corpus.
    #[test]
    fn property_owners_is_ordered_subsequence(
        deps in proptest::collection::vec(any::<bool>(), 0..16)
    ) {
        let mut engine = FakeEngine::default();
        let mut corpus = Vec::new();
        for (i, imports) in deps.iter().enumerate() {
            let name = format!("f{:02}.scss", i);
            let imported: &[&str] = if *imports { &["_shared.scss"] } else { &[] };
            engine = engine.depending(&name, imported);
            corpus.push(PathBuf::from(name));
        }
        let runner = Runner::new(engine, MemoryFs::default(), Recorder::default(), CompileOptions::new());

        let owners = runner.owners(&corpus, &[PathBuf::from("_shared.scss")]);

        let expected: Vec<PathBuf> = corpus
            .iter()
            .zip(&deps)
            .filter(|(_, imports)| **imports)
            .map(|(p, _)| p.clone())
            .collect();
        prop_assert_eq!(owners, expected);
    }
}
