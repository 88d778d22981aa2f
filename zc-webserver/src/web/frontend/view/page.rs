use maud::{html, Markup, DOCTYPE};

const MAIN_CSS_URL: &str = "/main.css";

pub fn page(title: &str, h: Option<Markup>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(MAIN_CSS_URL);
                @if let Some(h) = h {
                    (h)
                }
            }
            body {
                (content)
            }
        }
    }
}
