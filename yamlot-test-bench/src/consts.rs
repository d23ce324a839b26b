pub const SIMPLE_SEQ_INPUT: &str = r#"
- apple
- banana
- cherry
"#;

pub const SIMPLE_SEQ_TOKENS: &[&str] = &[
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(apple)",
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(banana)",
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(cherry)",
    "NEWLINE",
    "EOF",
];

pub const NESTED_SEQ_INPUT: &str = r#"- fruits
  - apple
  - banana
- vegetables
  - carrot
    - baby carrot
- done
"#;

pub const NESTED_SEQ_TOKENS: &[&str] = &[
    "DASH",
    "PLAIN-SCALAR(fruits)",
    "NEWLINE",
    "INDENT",
    "DASH",
    "PLAIN-SCALAR(apple)",
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(banana)",
    "NEWLINE",
    "DEDENT",
    "DASH",
    "PLAIN-SCALAR(vegetables)",
    "NEWLINE",
    "INDENT",
    "DASH",
    "PLAIN-SCALAR(carrot)",
    "NEWLINE",
    "INDENT",
    "DASH",
    "PLAIN-SCALAR(baby carrot)",
    "NEWLINE",
    "DEDENT",
    "DEDENT",
    "DASH",
    "PLAIN-SCALAR(done)",
    "NEWLINE",
    "EOF",
];

pub const OPEN_NESTING_INPUT: &str = "- a\n  - b\n    - c";

pub const OPEN_NESTING_TOKENS: &[&str] = &[
    "DASH",
    "PLAIN-SCALAR(a)",
    "NEWLINE",
    "INDENT",
    "DASH",
    "PLAIN-SCALAR(b)",
    "NEWLINE",
    "INDENT",
    "DASH",
    "PLAIN-SCALAR(c)",
    "DEDENT",
    "DEDENT",
    "EOF",
];

pub const MULTI_DOC_INPUT: &str = r#"---
- one
...
--- two
- three
... bye
"#;

pub const MULTI_DOC_TOKENS: &[&str] = &[
    "DOC-START",
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(one)",
    "NEWLINE",
    "DOC-END",
    "NEWLINE",
    "DOC-START",
    "PLAIN-SCALAR(two)",
    "NEWLINE",
    "DASH",
    "PLAIN-SCALAR(three)",
    "NEWLINE",
    "DOC-END",
    "PLAIN-SCALAR(bye)",
    "NEWLINE",
    "EOF",
];

pub const BAD_DEDENT_INPUT: &str = "- a\n    - b\n  - c\n";

/// Named scanner cases: name, input, rendered tokens.
pub const TOKEN_CASES: &[(&str, &str, &[&str])] = &[
    ("empty", "", &["EOF"]),
    ("lines", "\n\n", &["NEWLINE", "NEWLINE", "EOF"]),
    ("dash", "\n-\n", &["NEWLINE", "DASH", "NEWLINE", "EOF"]),
    (
        "dash-after-dash",
        "- - value\n",
        &["DASH", "PLAIN-SCALAR(- value)", "NEWLINE", "EOF"],
    ),
    ("double-dash-scalar-only", "--", &["PLAIN-SCALAR(--)", "EOF"]),
    (
        "double-dash-followed-by-text",
        "--a",
        &["PLAIN-SCALAR(--a)", "EOF"],
    ),
    (
        "double-dash-followed-by-text-newline",
        "--a\n",
        &["PLAIN-SCALAR(--a)", "NEWLINE", "EOF"],
    ),
    (
        "double-dash-then-space",
        "-- x",
        &["PLAIN-SCALAR(--)", "PLAIN-SCALAR(x)", "EOF"],
    ),
    ("isolated-dash", "-", &["DASH", "EOF"]),
    ("dash-followed-by-text", "-a", &["PLAIN-SCALAR(-a)", "EOF"]),
    (
        "double-dash-scalar-only-newline",
        "--\n",
        &["PLAIN-SCALAR(--)", "NEWLINE", "EOF"],
    ),
    ("isolated-dash-newline", "-\n", &["DASH", "NEWLINE", "EOF"]),
    (
        "dash-followed-by-text-newline",
        "-a\n",
        &["PLAIN-SCALAR(-a)", "NEWLINE", "EOF"],
    ),
    ("doc-start-marker", "---", &["DOC-START", "EOF"]),
    (
        "doc-start-marker-newline",
        "---\n",
        &["DOC-START", "NEWLINE", "EOF"],
    ),
    (
        "doc-start-with-scalar",
        "--- hello\n",
        &["DOC-START", "PLAIN-SCALAR(hello)", "NEWLINE", "EOF"],
    ),
    (
        "doc-start-with-scalar-two-spaces",
        "---  hello\n",
        &["DOC-START", "PLAIN-SCALAR( hello)", "NEWLINE", "EOF"],
    ),
    (
        "doc-start-then-empty-scalar",
        "--- \n",
        &["DOC-START", "PLAIN-SCALAR()", "NEWLINE", "EOF"],
    ),
    (
        "false-doc-start-four-dashes",
        "----",
        &["PLAIN-SCALAR(----)", "EOF"],
    ),
    (
        "false-doc-start-indented",
        "  ---",
        &["PLAIN-SCALAR(---)", "EOF"],
    ),
    (
        "false-doc-start-inline",
        "---value",
        &["PLAIN-SCALAR(---value)", "EOF"],
    ),
    (
        "false-doc-start-tab",
        "---\tvalue",
        &["PLAIN-SCALAR(---\tvalue)", "EOF"],
    ),
    (
        "scalar-with-tab",
        "-\tvalue\n",
        &["DASH", "PLAIN-SCALAR(\tvalue)", "NEWLINE", "EOF"],
    ),
    (
        "empty-scalar-two-spaces",
        "-  \n",
        &["DASH", "PLAIN-SCALAR( )", "NEWLINE", "EOF"],
    ),
    (
        "empty-scalar-after-dash",
        "- \n",
        &["DASH", "PLAIN-SCALAR()", "NEWLINE", "EOF"],
    ),
    (
        "plain-scalar-with-spaces",
        "-  hello world  \n",
        &["DASH", "PLAIN-SCALAR( hello world  )", "NEWLINE", "EOF"],
    ),
    (
        "plain-scalar-with-spaces-no-newline",
        "-  hello world  ",
        &["DASH", "PLAIN-SCALAR( hello world  )", "EOF"],
    ),
    (
        "tab-only-scalar",
        "-\t\t\n",
        &["DASH", "PLAIN-SCALAR(\t\t)", "NEWLINE", "EOF"],
    ),
    (
        "scalar-tabs-and-spaces",
        "- \t foo\t \n",
        &["DASH", "PLAIN-SCALAR(\t foo\t )", "NEWLINE", "EOF"],
    ),
    (
        "multiple-newlines-eof",
        "\n\n\n",
        &["NEWLINE", "NEWLINE", "NEWLINE", "EOF"],
    ),
    (
        "multiple-newlines-final-scalar",
        "- hello\n\n\n",
        &[
            "DASH",
            "PLAIN-SCALAR(hello)",
            "NEWLINE",
            "NEWLINE",
            "NEWLINE",
            "EOF",
        ],
    ),
    ("doc-end-marker", "...", &["DOC-END", "EOF"]),
    (
        "doc-end-marker-newline",
        "...\n",
        &["DOC-END", "NEWLINE", "EOF"],
    ),
    (
        "doc-end-with-scalar",
        "... goodbye\n",
        &["DOC-END", "PLAIN-SCALAR(goodbye)", "NEWLINE", "EOF"],
    ),
    ("false-doc-end-four-dots", "....", &["PLAIN-SCALAR(....)", "EOF"]),
    ("false-doc-end-indented", "  ...", &["PLAIN-SCALAR(...)", "EOF"]),
    (
        "false-doc-end-leading-space",
        " ...",
        &["PLAIN-SCALAR(...)", "EOF"],
    ),
    (
        "false-doc-end-tab-indented",
        "\t...",
        &["PLAIN-SCALAR(...)", "EOF"],
    ),
    (
        "false-doc-end-inline",
        "...value",
        &["PLAIN-SCALAR(...value)", "EOF"],
    ),
    ("false-doc-end-two-dots", "..", &["PLAIN-SCALAR(..)", "EOF"]),
    ("false-doc-end-one-dot", ".", &["PLAIN-SCALAR(.)", "EOF"]),
    (
        "false-doc-end-two-dots-newline",
        "..\n",
        &["PLAIN-SCALAR(..)", "NEWLINE", "EOF"],
    ),
    (
        "false-doc-end-one-dot-newline",
        ".\n",
        &["PLAIN-SCALAR(.)", "NEWLINE", "EOF"],
    ),
    (
        "dot-followed-by-text",
        ".hidden\n",
        &["PLAIN-SCALAR(.hidden)", "NEWLINE", "EOF"],
    ),
    (
        "plain-scalar-trimmed",
        "  hello  \n",
        &["PLAIN-SCALAR(hello)", "NEWLINE", "EOF"],
    ),
    (
        "comment-ends-scalar",
        "- apple # red\n",
        &[
            "DASH",
            "PLAIN-SCALAR(apple )",
            "PLAIN-SCALAR(# red)",
            "NEWLINE",
            "EOF",
        ],
    ),
    ("dash-with-indent", " -", &["INDENT", "DASH", "DEDENT", "EOF"]),
    (
        "unicode-scalar",
        "- héllo wörld\n",
        &["DASH", "PLAIN-SCALAR(héllo wörld)", "NEWLINE", "EOF"],
    ),
];
