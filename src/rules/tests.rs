use crate::expand;

#[test]
fn expansion_examples() {
    // Array of (expected, alias, template, input)
    let cases: Vec<(&str, &str, &str, &str)> = vec![
        // positional and rest-of-input
        ("a b-x-x y", "a b", "{0}-{1}-{@}", "a b x y"),
        ("https://github.com/torvalds", "gh", "https://github.com/{1}", "gh torvalds"),
        ("https://github.com/", "gh", "https://github.com/{1}", "gh"),
        ("q=rust lang", "s", "q={@}", "s rust lang"),
        ("q=", "s", "q={@}", "s"),
        ("gh", "gh", "{0}", "gh anything"),
        ("2-1", "x", "{2}-{1}", "x 1 2"),
        ("", "x", "{3}", "x 1 2"),
        // conditionals
        ("", "a", "{?1:yes}", "a"),
        ("yes", "a", "{?1:yes}", "a z"),
        ("/issues", "gh", "{?2:/issues}", "gh owner repo"),
        ("", "gh", "{?2:/issues}", "gh owner"),
        ("yes", "a", "{?1:yes}", "a  x"),
        ("repo/owner", "gh", "repo{?1:/{1}}", "gh owner"),
        ("repo", "gh", "repo{?1:/{1}}", "gh"),
        // casing
        ("hello-world", "a", "{kebab:HelloWorld}", "a"),
        ("WORLD", "a", "{upper:{1}}", "a world"),
        ("world", "a", "{lower:{1}}", "a WORLD"),
        ("helloWorld", "a", "{camel:hello world}", "a"),
        ("hello_world", "a", "{snake:HelloWorld}", "a"),
        ("HelloWorld", "a", "{pascal:hello-world}", "a"),
        ("Hello World", "a", "{capital:hello_world}", "a"),
        ("hello/world", "a", "{path:HelloWorld}", "a"),
        ("hello.world", "a", "{dot:hello world}", "a"),
        ("docs/my-page", "w", "docs/{kebab:{@}}", "w My Page"),
        // a substituted token containing `}` ends the argument early
        ("X", "a", "{upper:{1}}", "a x}y"),
        ("/a", "gh", "{?1:/{1}}", "gh a}b"),
        // degraded input
        ("", "a", "{unknown:x}", "a"),
        ("", "a", "{upper:}", "a"),
        ("a", "a", "a{b", "a"),
        ("a", "a", "a}b", "a"),
        ("plain", "a", "plain", "a x"),
    ];

    for (expected, alias, template, input) in cases {
        assert_eq!(
            expand(alias, template, input),
            expected,
            "expand({alias:?}, {template:?}, {input:?})"
        );
    }
}

#[test]
fn conditional_on_empty_token_counts_as_defined() {
    // "a  x" splits to ["", "x"], so {1} exists but is empty.
    assert_eq!(expand("a", "[{1}]{?1:set}", "a  x"), "[]set");
}

#[test]
fn conditional_nested_inside_casing() {
    assert_eq!(expand("a", "{upper:x{?1:-{1}}}", "a y"), "X-Y");
    assert_eq!(expand("a", "{upper:x{?1:-{1}}}", "a"), "X");
}

#[test]
fn rules_are_ordered_conditional_then_casing() {
    let names: Vec<&str> = crate::rules::get().iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["conditional positional", "upper", "lower", "kebab", "camel", "snake", "pascal", "capital", "path", "dot"]
    );
}
