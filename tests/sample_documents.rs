//! Whole-document rendering of the curated samples
//!
//! Sources come from `samples/` via `Samples`; never inline a document here.

use mudog::mudog::testing::{render_sample, Samples};

#[test]
fn test_000_docline() {
    let markdown = render_sample("000-docline.c").unwrap();
    insta::assert_debug_snapshot!(markdown, @r###""\n# stack.h\nA fixed-size integer stack.""###);
}

#[test]
fn test_010_docbegin_strips_leading_tabs() {
    let markdown = render_sample("010-docbegin.c").unwrap();
    insta::assert_debug_snapshot!(markdown, @r###""## Usage\n\nPush with `stack_push`, pop with `stack_pop`.\nNested\tindentation keeps inner tabs.\n""###);
}

#[test]
fn test_020_snippets() {
    let markdown = render_sample("020-snippets.c").unwrap();
    insta::assert_debug_snapshot!(markdown, @r###""\n## Functions\n\n```c\nint stack_push(struct stack *s, int value);\n```\n\n\n```c\nint stack_pop(struct stack *s);\n```\n\nCapacity constant: STACK_CAPACITY""###);
}

#[test]
fn test_030_gating() {
    let markdown = render_sample("030-gating.c").unwrap();
    insta::assert_debug_snapshot!(markdown, @r###""\nvisible before\nvisible after""###);
}

#[test]
fn test_040_stack() {
    let markdown = render_sample("040-stack.c").unwrap();
    insta::assert_debug_snapshot!(markdown, @r###""# stack\nA tiny stack for int values.\n\n## API\n\n```c\nint stack_push(stack_t *s, int value) {\n```\n\n\n```c\nint stack_pop(stack_t *s);\n```\n""###);
}

#[test]
fn test_every_sample_renders_deterministically() {
    for name in Samples::list().unwrap() {
        let first = render_sample(&name).unwrap();
        let second = render_sample(&name).unwrap();
        assert_eq!(first, second, "{} rendered differently twice", name);
    }
}
