use article_sieve::{extract_with_options, Error, Options, UrlResolver};

fn resolver(base: &str) -> UrlResolver {
    UrlResolver::new(base).expect("valid base url")
}

#[test]
fn parent_directory_link() {
    let r = resolver("http://x.com/a/b/c.html");
    assert_eq!(r.resolve("../img/a.png"), "http://x.com/a/img/a.png");
}

#[test]
fn absolute_link_is_unchanged() {
    let r = resolver("http://x.com/a/b/c.html");
    assert_eq!(r.resolve("https://cdn.com/x.png"), "https://cdn.com/x.png");
}

#[test]
fn host_and_port_are_inherited() {
    let r = resolver("https://x.com:8443/docs/guide/intro.html");
    assert_eq!(r.resolve("/static/a.css"), "https://x.com:8443/static/a.css");
    assert_eq!(r.resolve("next.html"), "https://x.com:8443/docs/guide/next.html");
}

#[test]
fn malformed_base_is_an_error() {
    assert!(matches!(UrlResolver::new("x.com/a"), Err(Error::InvalidBaseUrl { .. })));
    assert!(matches!(UrlResolver::new("data:text/plain,hi"), Err(Error::BaseUrlWithoutHost(_))));
}

#[test]
fn content_links_and_images_are_rewritten() {
    let html = r#"<html><body><div class="article">
        <p>See <a href="../other.html">the other story</a>.</p>
        <img src="pics/1.jpg">
        </div></body></html>"#;
    let options = Options {
        base_url: Some("https://news.example.com/2024/05/story.html".to_string()),
        ..Options::default()
    };

    let result = extract_with_options(html, &options).expect("extraction failed");

    let content = result.content_html.expect("no content");
    assert!(content.contains(r#"href="https://news.example.com/2024/other.html""#));
    assert!(content.contains(r#"src="https://news.example.com/2024/05/pics/1.jpg""#));
    assert_eq!(result.images, ["https://news.example.com/2024/05/pics/1.jpg"]);
}

#[test]
fn list_and_pages_keep_raw_hrefs() {
    let html = r#"<ul class="list"><li><a href="/news/1.html">One</a></li></ul>"#;
    let options = Options {
        base_url: Some("https://x.com/".to_string()),
        ..Options::default()
    };

    let result = extract_with_options(html, &options).expect("extraction failed");

    assert_eq!(result.list[0].url, "/news/1.html");
}

#[test]
fn raw_replacement_also_hits_matching_text() {
    // Rewriting replaces every occurrence of a raw link in the serialized
    // content, so the same string in prose changes too.
    let r = resolver("http://x.com/d/p.html");
    let rewritten = r.rewrite_content(r#"<p>logo.png</p><img src="logo.png">"#);
    assert_eq!(
        rewritten,
        r#"<p>http://x.com/d/logo.png</p><img src="http://x.com/d/logo.png">"#
    );
}

#[test]
fn malformed_base_fails_extraction() {
    let options = Options {
        base_url: Some("not a url".to_string()),
        ..Options::default()
    };
    assert!(extract_with_options("<article>x</article>", &options).is_err());
}
