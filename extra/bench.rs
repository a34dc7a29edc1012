use {
    core::{hint::black_box, time::Duration},
    criterion::{BatchSize, Criterion},
    getoptions::{Arity, OptRule, OptionTable, getopt}
};

const RULES: &[OptRule] = &[
    OptRule::new_auto("help"),
    OptRule::new_auto("output").set_arity(Arity::Required),
    OptRule::new_auto("verbose"),
    OptRule::new_auto("test").set_arity(Arity::Optional),
    OptRule::new_auto("xyz"),
    OptRule::new("version")
];

const MIXED: [&str; 7] = ["--help", "--output=data1", "zero", "-odata2", "-vvv", "one", "two"];

fn positional_heavy() -> Vec<String> {
    (0..256).map(|i| format!("file{}.txt", i)).collect()
}

fn cluster_heavy() -> Vec<String> {
    (0..256).map(|i| if i % 2 == 0 { "-xvvxv".to_owned() } else { "-xtvalue".to_owned() }).collect()
}

fn terminated() -> Vec<String> {
    let mut tokens = vec!["-v".to_owned(), "--".to_owned()];
    tokens.extend((0..256).map(|i| format!("-{}", i)));
    tokens
}

fn table_reuse_and_fresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("getopt_mixed");

    group.bench_function("fresh_table", |b| {
        b.iter(|| black_box(getopt(black_box(&MIXED), black_box(RULES))));
    });

    let table = OptionTable::new(RULES);
    group.bench_function("reused_table", |b| {
        b.iter(|| black_box(table.getopt(black_box(&MIXED))));
    });

    group.bench_function("build_table", |b| {
        b.iter(|| black_box(OptionTable::new(black_box(RULES))));
    });

    group.finish();
}

fn token_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("getopt_shapes");
    let table = OptionTable::new(RULES);

    for (name, setup) in [
        ("positional", positional_heavy as fn() -> Vec<String>),
        ("cluster", cluster_heavy),
        ("terminated", terminated)
    ] {
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                setup,
                |tokens| {
                    let _ = black_box(table.getopt(black_box(tokens.as_slice())));
                },
                BatchSize::SmallInput
            );
        });
    }

    group.finish();
}

pub fn stdcmp() {
    let mut criterion: Criterion<_> = Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .noise_threshold(0.01)
        .configure_from_args();
    table_reuse_and_fresh(&mut criterion);
    token_shapes(&mut criterion);
}

fn main() {
    stdcmp();

    Criterion::default().configure_from_args().final_summary();
}
