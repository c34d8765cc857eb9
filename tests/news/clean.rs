use postcraft::news::clean::{
    clean_entities, collapse_whitespace, plain_text, strip_tags, truncate_chars, DESCRIPTION_LIMIT,
};

#[test]
fn decodes_common_entities() {
    assert_eq!(
        clean_entities("Tom &amp; Jerry &lt;3 &quot;AI&quot; isn&#039;t&nbsp;magic"),
        "Tom & Jerry <3 \"AI\" isn't magic"
    );
}

#[test]
fn decodes_double_encoded_fragments() {
    assert_eq!(clean_entities("Hello&amp;#160;world"), "Hello world");
    assert_eq!(
        clean_entities("&amp;#8220;Agents&amp;#8221; are coming [&amp;#8230;]"),
        "\"Agents\" are coming ..."
    );
    assert_eq!(clean_entities("&amp;amp;lt;tag&amp;amp;gt;"), "<tag>");
}

#[test]
fn cleaning_is_idempotent() {
    let samples = [
        "Plain text",
        "  padded  ",
        "Tom &amp; Jerry",
        "&amp;amp;amp;nbsp;",
        "&amp;#160;&amp;#8230;[&amp;#8230;]",
        "&lt;p&gt;Hello&lt;/p&gt;",
        "AT&T &unknown; & more",
        "\u{a0}\u{201c}quoted\u{201d}\u{a0}",
        "",
    ];
    for sample in samples {
        let once = clean_entities(sample);
        assert_eq!(clean_entities(&once), once, "sample: {sample:?}");
    }
}

#[test]
fn clean_text_is_untouched() {
    assert_eq!(
        clean_entities("Neural networks beat benchmark"),
        "Neural networks beat benchmark"
    );
}

#[test]
fn strips_tags_but_keeps_comparisons() {
    assert_eq!(
        collapse_whitespace(&strip_tags("<p>Hello <b>world</b></p>")),
        "Hello world"
    );
    assert_eq!(strip_tags("a < b and c > d"), "a < b and c > d");
}

#[test]
fn truncates_long_text_with_ellipsis() {
    let text = "word ".repeat(100);
    let out = truncate_chars(&text, DESCRIPTION_LIMIT);

    assert!(out.ends_with("..."));
    assert!(out.chars().count() <= DESCRIPTION_LIMIT + 3);
    assert_eq!(truncate_chars("short", DESCRIPTION_LIMIT), "short");
}

#[test]
fn plain_text_drops_markup_and_entities() {
    assert_eq!(
        plain_text("&lt;p&gt;OpenAI ships&amp;#160;a  new\nmodel&lt;/p&gt;"),
        "OpenAI ships a new model"
    );
}
