#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const ARTICLE: &str = "{{Infobox river
|name = 长江
|length = {{convert|6300|km}}
}}
'''长江'''是亚洲第一长河，也是世界第三长河，全长约六千三百公里。<ref name=\"len\">长江水利委员会</ref>

长江发源于青藏高原的唐古拉山脉，流经十一个省级行政区。[[File:Yangtze.jpg|thumb|[[长江]]的照片]]

长江流域是中国经济最发达的地区之一，孕育了灿烂的[[中华文化|文化]]。

长江三角洲地区包括[[上海]]、江苏和浙江等地，是重要的经济中心。

== 参见 ==
* [[黄河]]

[[Category:中国河流]]
[[Category:亚洲河流|长江]]";

/// Cleaned text of [ARTICLE].
pub fn cleaned_article() -> String {
    [
        "长江是亚洲第一长河，也是世界第三长河，全长约六千三百公里。",
        "长江发源于青藏高原的唐古拉山脉，流经十一个省级行政区。",
        "长江流域是中国经济最发达的地区之一，孕育了灿烂的文化。",
        "长江三角洲地区包括上海、江苏和浙江等地，是重要的经济中心。",
    ]
    .join("\n\n")
}

/// Long enough for the decoder, but nothing is left once cleaned.
pub fn template_only() -> String {
    format!(
        "{{{{Infobox river\n{}}}}}\n短文。",
        "|名称 = 长江水系支流\n".repeat(20)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn page(title: &str, id: u32, text: &str) -> String {
    format!(
        "  <page>
    <title>{title}</title>
    <ns>0</ns>
    <id>{id}</id>
    <revision>
      <id>9{id}</id>
      <timestamp>2025-02-01T00:00:00Z</timestamp>
      <contributor><username>编辑者</username><id>7</id></contributor>
      <text bytes=\"{bytes}\" xml:space=\"preserve\">{text}</text>
    </revision>
  </page>
",
        title = escape(title),
        id = id,
        bytes = text.len(),
        text = escape(text)
    )
}

pub fn dump(pages: &[String]) -> String {
    format!(
        "<mediawiki xmlns=\"http://www.mediawiki.org/xml/export-0.11/\" version=\"0.11\" xml:lang=\"zh\">
  <siteinfo><sitename>维基百科</sitename></siteinfo>
{}</mediawiki>
",
        pages.concat()
    )
}

/// A dump with one article of each kind.
pub fn mixed_dump() -> String {
    dump(&[
        page("长江", 1, ARTICLE),
        page("扬子江", 2, "#重定向 [[长江]]"),
        page("Template:长江水系", 3, &ARTICLE.repeat(2)),
        page("长江 (消歧义)", 4, ARTICLE),
        page("黄河", 5, "黄河是中国第二长河。"),
        page("长江水系", 6, &template_only()),
    ])
}

pub fn write_bz2(path: &Path, xml: &str) {
    let f = File::create(path).unwrap();
    let mut enc = bzip2::write::BzEncoder::new(f, bzip2::Compression::default());
    enc.write_all(xml.as_bytes()).unwrap();
    enc.finish().unwrap();
}

pub fn write_gz(path: &Path, xml: &str) {
    let f = File::create(path).unwrap();
    let mut enc = flate2::write::GzEncoder::new(f, flate2::Compression::default());
    enc.write_all(xml.as_bytes()).unwrap();
    enc.finish().unwrap();
}
