use change_case_core::{
    MemoryBuffer, Position, Range, Selection, TransformRegistry, WordClass, apply_case_transform,
    labels, plan_replacements, remap_selections,
};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "let someValue{i:06} = otherValue + thirdValue * fourthValue; // fooBar\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

/// Four selections per line: every camelCase identifier.
fn identifier_selections(line_count: usize) -> Vec<Selection> {
    let mut selections = Vec::with_capacity(line_count * 4);
    for line in 0..line_count {
        for (start, end) in [(4, 19), (22, 32), (35, 45), (48, 59)] {
            selections.push(Selection::from_range(Range::from_coords(
                line, start, line, end,
            )));
        }
    }
    selections
}

fn bench_same_line_selections(c: &mut Criterion) {
    let text = large_text(5_000);
    let selections = identifier_selections(5_000);
    let registry = TransformRegistry::builtin();

    c.bench_function("apply_snake/20k_selections", |b| {
        b.iter_batched(
            || MemoryBuffer::new(&text),
            |mut buffer| {
                let outcome = apply_case_transform(
                    &mut buffer,
                    black_box(&selections),
                    labels::SNAKE,
                    &registry,
                    WordClass::default(),
                )
                .unwrap();
                black_box(outcome.selections.len());
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_remap_only(c: &mut Criterion) {
    let text = large_text(5_000);
    let buffer = MemoryBuffer::new(&text);
    let selections = identifier_selections(5_000);
    let actions = plan_replacements(
        &buffer,
        &selections,
        |s| s.to_uppercase(),
        WordClass::default(),
    )
    .unwrap();

    c.bench_function("remap/20k_actions", |b| {
        b.iter(|| black_box(remap_selections(black_box(&actions))))
    });
}

fn bench_caret_words(c: &mut Criterion) {
    let text = large_text(5_000);
    let carets: Vec<Selection> = (0..5_000)
        .map(|line| Selection::cursor(Position::new(line, 8)))
        .collect();
    let registry = TransformRegistry::builtin();

    c.bench_function("apply_kebab/5k_carets", |b| {
        b.iter_batched(
            || MemoryBuffer::new(&text),
            |mut buffer| {
                apply_case_transform(
                    &mut buffer,
                    black_box(&carets),
                    labels::KEBAB,
                    &registry,
                    WordClass::WithDot,
                )
                .unwrap();
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_same_line_selections,
    bench_remap_only,
    bench_caret_words
);
criterion_main!(benches);
