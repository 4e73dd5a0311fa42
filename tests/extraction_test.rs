use article_sieve::{extract, extract_with_options, Options};

#[test]
fn lone_article_is_selected() {
    let html = "<html><body><div><span>menu</span></div>\
        <article><h1>Title</h1><span>Body</span></article></body></html>";

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.starts_with("<article>"));
    assert_eq!(result.content_text, "TitleBody");
    assert!(result.warnings.is_empty());
}

#[test]
fn named_container_outscores_enclosing_article() {
    let html = r#"<html><body><article>
        <div class="content"><p>First paragraph.</p><p>Second paragraph.</p></div>
        </article></body></html>"#;

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.starts_with("<div>"), "got {content}");
    assert!(content.contains("<p>First paragraph.</p>"));
}

#[test]
fn container_class_and_id_are_cleared() {
    let html = r#"<div id="main" class="post-body"><p>Text</p></div>"#;

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(!content.contains("post-body"));
    assert!(!content.contains("main"));
}

#[test]
fn noise_and_layout_are_purified() {
    let html = r#"<html><body><div class="post">
        <p>Keep this.</p>
        <div class="share"><a href="/s">Share</a></div>
        <script>track()</script>
        <form><input name="q"></form>
        <blockquote>Quoted.</blockquote>
        </div></body></html>"#;

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.contains("Keep this."));
    assert!(content.contains("<blockquote>Quoted.</blockquote>"));
    assert!(!content.contains("Share"));
    assert!(!content.contains("track()"));
    assert!(!content.contains("<form"));
}

#[test]
fn single_child_wrapper_goes_with_styled_child() {
    let html = r#"<div class="article"><p>Body</p><section><span class="ad">Buy</span></section></div>"#;

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(!content.contains("<section"));
    assert!(!content.contains("Buy"));
}

#[test]
fn no_container_without_force() {
    let html = "<html><body><span>Just a span</span></body></html>";

    let result = extract(html).expect("extraction failed");

    assert!(result.content_html.is_none());
    assert!(result.content_text.is_empty());
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn force_falls_back_to_body() {
    let html = "<html><body><span>Just a span</span></body></html>";
    let options = Options {
        force_body: true,
        ..Options::default()
    };

    let result = extract_with_options(html, &options).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.starts_with("<body>"));
    assert!(result.content_text.contains("Just a span"));
}

#[test]
fn custom_keywords_change_container_matching() {
    let html = r#"<div class="story"><p>One</p><p>Two</p></div>"#;

    let default = extract(html).expect("extraction failed");
    assert!(default.content_html.is_none());

    let options = Options {
        content_keywords: vec!["story".to_string()],
        ..Options::default()
    };
    let custom = extract_with_options(html, &options).expect("extraction failed");
    assert_eq!(custom.content_text, "OneTwo");
}

#[test]
fn text_limit_truncates_plain_text() {
    let html = "<article>abcdefghij</article>";
    let options = Options {
        text_limit: Some(4),
        ..Options::default()
    };

    let result = extract_with_options(html, &options).expect("extraction failed");

    assert_eq!(result.content_text, "abcd");
}

#[test]
fn images_listed_in_document_order() {
    let html = r#"<div class="content"><p>Text</p><img src="/1.png"><p><img src="/2.png"></p></div>"#;

    let result = extract(html).expect("extraction failed");

    assert_eq!(result.images, vec!["/1.png", "/2.png"]);
}

#[test]
fn content_inside_page_wide_form_is_still_purified() {
    let html = "<body><form id=aspnetForm><nav>menu</nav><div class=content>\
        <p>Para one.</p><p>Para two.</p><script>track()</script><button>Buy</button>\
        <input name=q><style>p{}</style></div></form></body>";

    let result = extract(html).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.starts_with("<div><p>Para one.</p><p>Para two.</p>"), "got {content}");
    for tag in ["<nav", "<script", "<button", "<input", "<style", "<form"] {
        assert!(!content.contains(tag), "{tag} left in {content}");
    }
    assert_eq!(result.content_text.trim(), "Para one.Para two.");
}
