use arbor::selection::BinaryGain;
use arbor::{parse_arff, Learner};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const RESTAURANT: &str = "\
% the twelve-example restaurant relation
@relation restaurant
@attribute alternate {yes, no}
@attribute bar {yes, no}
@attribute friday {yes, no}
@attribute hungry {yes, no}
@attribute patrons {none, some, full}
@attribute price {$, $$, $$$}
@attribute raining {yes, no}
@attribute reservation {yes, no}
@attribute type {french, italian, thai, burger}
@attribute estimate {0-10, 10-30, 30-60, >60}
@attribute will_wait {yes, no}
@data
yes,no,no,yes,some,$$$,no,yes,french,0-10,yes
yes,no,no,yes,full,$,no,no,thai,30-60,no
no,yes,no,no,some,$,no,no,burger,0-10,yes
yes,no,yes,yes,full,$,yes,no,thai,10-30,yes
yes,no,yes,no,full,$$$,no,yes,french,>60,no
no,yes,no,yes,some,$$,yes,yes,italian,0-10,yes
no,yes,no,no,none,$,yes,no,burger,0-10,no
no,no,no,yes,some,$$,yes,yes,thai,0-10,yes
no,yes,yes,no,full,$,yes,no,burger,>60,no
yes,yes,yes,yes,full,$$$,no,yes,italian,10-30,no
no,no,no,no,none,$,no,no,thai,0-10,no
yes,yes,yes,yes,full,$,no,no,burger,30-60,yes
";

pub fn induction_benchmarks(c: &mut Criterion) {
    let dataset = parse_arff(RESTAURANT).expect("restaurant relation parses");
    let examples = dataset.labeled_examples("will_wait");
    let attributes: Vec<String> = dataset
        .attribute_names()
        .into_iter()
        .filter(|name| name != "will_wait")
        .collect();
    let policy = BinaryGain::new("yes", "no");
    let learner = Learner::new(&policy);

    c.bench_function("parse restaurant", |b| {
        b.iter(|| parse_arff(black_box(RESTAURANT)))
    });

    c.bench_function("induce restaurant", |b| {
        b.iter(|| learner.induce(black_box(&examples), black_box(&attributes), black_box(&examples)))
    });
}

criterion_group!(benches, induction_benchmarks);
criterion_main!(benches);
