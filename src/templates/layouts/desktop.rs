use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 1100px; padding: 0 1rem; color: #222; }
header { display: flex; align-items: baseline; justify-content: space-between; margin-bottom: 1rem; }
form.search { display: flex; gap: .5rem; margin-bottom: 1rem; }
form.search input[type=search] { flex: 1; padding: .4rem .6rem; font-size: 1rem; }
table { border-collapse: collapse; width: 100%; font-size: .92rem; }
th, td { border-bottom: 1px solid #e3e3e3; padding: .35rem .6rem; text-align: left; white-space: nowrap; }
th a { color: inherit; text-decoration: none; }
th[aria-sort] a { color: #524ed2; }
.muted { color: #777; font-size: .85rem; }
.notice { background: #fff4e5; border: 1px solid #f0c36d; padding: .6rem .8rem; margin-bottom: 1rem; border-radius: 4px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h3 { "Locations" }
                    nav {
                        a href="/" { "Reset" }
                    }
                }
                (content)
            }
        }
    }
}
