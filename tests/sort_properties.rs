use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shape_sort::algorithms::is_sorted_by;
use shape_sort::runner::run_all;
use shape_sort::{Metric, Shape, ShapeKind, SortAlgorithm, SortOrder, SortRun};

fn shape_strategy() -> impl Strategy<Value = Shape> {
    // Small integer dimensions make exact metric ties common
    (0..ShapeKind::ALL.len(), 0u32..20, 0u32..8).prop_map(|(kind, height, second)| {
        Shape::new(ShapeKind::ALL[kind], f64::from(height), f64::from(second))
    })
}

fn random_shapes(seed: u64, count: usize) -> Vec<Shape> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
            Shape::new(kind, rng.gen_range(0.5..500.0), rng.gen_range(0.5..100.0))
        })
        .collect()
}

/// Sort the bit patterns so two sequences can be compared as multisets
fn multiset_key(shapes: &[Shape]) -> Vec<(String, u64, u64)> {
    let mut key: Vec<_> = shapes
        .iter()
        .map(|s| (s.kind().to_string(), s.height().to_bits(), s.second_dimension().to_bits()))
        .collect();
    key.sort();
    key
}

proptest! {
    #[test]
    fn sorted_output_is_ordered_permutation(
        shapes in prop::collection::vec(shape_strategy(), 0..60),
        descending in any::<bool>(),
    ) {
        let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
        for metric in Metric::ALL {
            for algorithm in SortAlgorithm::ALL {
                let run = SortRun::execute(&shapes, metric, algorithm, order);
                prop_assert_eq!(run.shapes.len(), shapes.len());
                prop_assert!(is_sorted_by(&run.shapes, metric.comparator(order)),
                    "{} by {} not ordered", algorithm, metric);
                prop_assert_eq!(multiset_key(&run.shapes), multiset_key(&shapes));
            }
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity(
        shapes in prop::collection::vec(shape_strategy(), 0..40),
    ) {
        for metric in Metric::ALL {
            for algorithm in SortAlgorithm::ALL {
                let once = SortRun::execute(&shapes, metric, algorithm, SortOrder::Ascending);
                let twice = SortRun::execute(&once.shapes, metric, algorithm, SortOrder::Ascending);
                prop_assert_eq!(&twice.metric_values(), &once.metric_values());
                if algorithm.is_stable() {
                    prop_assert_eq!(&twice.shapes, &once.shapes);
                }
            }
        }
    }

    #[test]
    fn stable_algorithms_preserve_tie_order(
        shapes in prop::collection::vec(shape_strategy(), 0..60),
    ) {
        // Tag each shape with its input position, then sort by metric alone
        let tagged: Vec<(usize, Shape)> = shapes.iter().copied().enumerate().collect();
        for metric in Metric::ALL {
            for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
                let mut data = tagged.clone();
                algorithm.sort_by(&mut data, |a, b| metric.compare(&a.1, &b.1));
                for pair in data.windows(2) {
                    if metric.compare(&pair[0].1, &pair[1].1).is_eq() {
                        prop_assert!(pair[0].0 < pair[1].0,
                            "{} by {} reordered equal elements", algorithm, metric);
                    }
                }
            }
        }
    }
}

#[test]
fn all_algorithms_agree_on_metric_values() {
    let shapes = random_shapes(0x5eed, 2_000);
    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let runs = run_all(&shapes, order);
        for metric in Metric::ALL {
            let mut values = runs
                .iter()
                .filter(|run| run.metric == metric)
                .map(SortRun::metric_values);
            let first = values.next().expect("Missing run for metric");
            for other in values {
                assert_eq!(other, first, "algorithms disagree on {metric} ({order})");
            }
        }
    }
}

#[test]
fn boundary_inputs_are_unchanged() {
    let single = vec![Shape::new(ShapeKind::TriangularPrism, 3.0, 2.0)];
    for metric in Metric::ALL {
        for algorithm in SortAlgorithm::ALL {
            let run = SortRun::execute(&[], metric, algorithm, SortOrder::Ascending);
            assert!(run.shapes.is_empty());

            let run = SortRun::execute(&single, metric, algorithm, SortOrder::Ascending);
            assert_eq!(run.shapes, single);
        }
    }
}

#[test]
fn cones_by_height_scenario() {
    let cones = vec![
        Shape::new(ShapeKind::Cone, 10.0, 5.0),
        Shape::new(ShapeKind::Cone, 7.0, 3.0),
        Shape::new(ShapeKind::Cone, 15.0, 4.0),
    ];
    let expected = vec![cones[1], cones[0], cones[2]];
    for algorithm in SortAlgorithm::ALL {
        let run = SortRun::execute(&cones, Metric::Height, algorithm, SortOrder::Ascending);
        assert_eq!(run.shapes, expected, "{algorithm} sort by height");
    }
}

#[test]
fn natural_order_matches_height_selector() {
    let shapes = random_shapes(42, 300);
    let mut by_selector = shapes.clone();
    SortAlgorithm::Merge.sort_by(&mut by_selector, Shape::cmp_height);

    for algorithm in SortAlgorithm::ALL {
        let mut data = shapes.clone();
        algorithm.sort_by(&mut data, |a, b| Metric::Height.compare(a, b));
        let heights: Vec<f64> = data.iter().map(Shape::height).collect();
        let expected: Vec<f64> = by_selector.iter().map(Shape::height).collect();
        assert_eq!(heights, expected);
    }
}

#[test]
fn large_presorted_input_with_quick_sort() {
    let mut shapes = random_shapes(7, 5_000);
    SortAlgorithm::Heap.sort_by(&mut shapes, |a, b| Metric::Volume.compare(a, b));

    let run = SortRun::execute(&shapes, Metric::Volume, SortAlgorithm::Quick, SortOrder::Ascending);
    assert!(run.is_ordered());
    assert!(run.elapsed_ms() >= 0.0);
}
