use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use orst_core::*;

struct TestRegistry {
    full: AlgorithmRegistry,
    partial: AlgorithmRegistry,
}

impl TestRegistry {
    fn new() -> Self {
        let full = AlgorithmRegistry::default();
        let partial = AlgorithmRegistry::builder()
            .register(BubbleSorter)
            .register(QuickSorter)
            .register(MergeSorter)
            .build()
            .expect("three distinct algorithms should build a registry");

        TestRegistry { full, partial }
    }
}

mod lookup {
    use super::*;

    #[test]
    fn every_id_is_registered() {
        let tester = TestRegistry::new();

        for id in AlgorithmId::ALL {
            let algorithm = tester.full.get(id).expect("default registry covers every id");
            assert_eq!(algorithm.id(), id);
        }
        assert!(tester.full.ensure_complete().is_ok());
    }

    #[test]
    fn same_id_same_instance() {
        let tester = TestRegistry::new();

        for id in AlgorithmId::ALL {
            let first = tester.full.get(id).unwrap();
            let second = tester.full.get(id).unwrap();
            assert!(Arc::ptr_eq(&first, &second));
        }
    }

    #[test]
    fn clones_share_instances() {
        let tester = TestRegistry::new();
        let clone = tester.full.clone();

        let original = tester.full.get(AlgorithmId::Heap).unwrap();
        let cloned = clone.get(AlgorithmId::Heap).unwrap();
        assert!(Arc::ptr_eq(&original, &cloned));
    }

    #[test]
    fn unregistered_id_is_an_error() {
        let tester = TestRegistry::new();

        for id in [AlgorithmId::Heap, AlgorithmId::Radix, AlgorithmId::DutchFlag] {
            assert_eq!(
                tester.partial.get(id).unwrap_err(),
                RegistryError::Unregistered(id)
            );
        }
    }

    #[test]
    fn partial_registry_returns_what_it_was_built_with() {
        let tester = TestRegistry::new();

        let quick = tester.partial.get(AlgorithmId::Quick).unwrap();
        assert_eq!(quick.name(), "Quick Sort");

        let ids: Vec<_> = tester
            .partial
            .available()
            .iter()
            .map(|algorithm| algorithm.id())
            .collect();
        assert_eq!(
            ids,
            vec![AlgorithmId::Bubble, AlgorithmId::Quick, AlgorithmId::Merge]
        );
        assert!(tester.partial.ensure_complete().is_err());
    }

    #[test]
    fn concrete_sorters_work_through_both_traits() {
        let mut generic = vec![3, -1, 2];
        BubbleSorter.sort(&mut generic);
        assert_eq!(generic, vec![-1, 2, 3]);

        let mut counted: Vec<Value> = vec![3, -1, 2];
        let stats = BubbleSorter.sort_values(&mut counted);
        assert_eq!(counted, vec![-1, 2, 3]);
        assert!(stats.comparisons > 0);
        assert_eq!(BubbleSorter.id(), AlgorithmId::Bubble);
    }

    #[test]
    fn lookup_by_name() {
        let tester = TestRegistry::new();

        let shell = tester.full.get_by_name("ShellSort").unwrap();
        assert_eq!(shell.id(), AlgorithmId::Shell);
        assert!(matches!(
            tester.full.get_by_name("bogo"),
            Err(RegistryError::UnknownName(_))
        ));
    }
}

mod available {
    use super::*;

    #[test]
    fn one_instance_per_id() {
        let tester = TestRegistry::new();
        let available = tester.full.available();

        assert_eq!(available.len(), AlgorithmId::ALL.len());
        let ids: HashSet<_> = available.iter().map(|algorithm| algorithm.id()).collect();
        assert_eq!(ids.len(), AlgorithmId::ALL.len());
    }

    #[test]
    fn order_is_stable() {
        let tester = TestRegistry::new();

        let first: Vec<_> = tester.full.available().iter().map(|a| a.id()).collect();
        let second: Vec<_> = tester.full.available().iter().map(|a| a.id()).collect();
        assert_eq!(first, second);
        assert_eq!(first, AlgorithmId::ALL.to_vec());
    }

    #[test]
    fn instances_match_lookups() {
        let tester = TestRegistry::new();

        for algorithm in tester.full.available() {
            let looked_up = tester.full.get(algorithm.id()).unwrap();
            assert!(Arc::ptr_eq(&algorithm, &looked_up));
        }
    }

    #[test]
    fn metadata_is_consistent() {
        let tester = TestRegistry::new();
        let names: HashSet<_> = tester.full.available().iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), AlgorithmId::ALL.len());

        let merge = tester.full.get(AlgorithmId::Merge).unwrap();
        assert!(merge.info().stable);
        assert!(!merge.info().in_place);
        assert_eq!(merge.info().worst.to_string(), "O(n log n)");

        let bubble = tester.full.get(AlgorithmId::Bubble).unwrap();
        assert!(bubble.info().is_quadratic());
    }
}

mod concurrency {
    use super::*;

    #[test]
    fn lookups_from_many_threads() {
        let registry = AlgorithmRegistry::default();

        thread::scope(|scope| {
            for (n, id) in AlgorithmId::ALL.into_iter().enumerate() {
                let registry = &registry;
                scope.spawn(move || {
                    let algorithm = registry.get(id).unwrap();
                    let mut values: Vec<Value> = (0..100 + n as Value).rev().collect();
                    algorithm.sort_values(&mut values);
                    assert!(values.windows(2).all(|w| w[0] <= w[1]));
                    assert_eq!(registry.available().len(), AlgorithmId::ALL.len());
                });
            }
        });
    }

    #[test]
    fn shared_registry_from_many_threads() {
        let pointers: Vec<usize> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| AlgorithmRegistry::shared() as *const _ as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }
}
