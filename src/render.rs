//! Card rendering for the terminal and as a standalone HTML page.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::Recipe;

pub const PAGE_TITLE: &str = "My Meal Planner";
pub const PAGE_SUBTITLE: &str = "Paste a recipe URL below to add it to your planner.";
pub const EMPTY_STATE: &str = "No recipes yet. Add one to get started.";
pub const DETAILS_LABEL: &str = "View Details";
/// Shown in place of a missing servings count
pub const NO_SERVINGS: &str = "—";

pub fn servings_label(recipe: &Recipe) -> String {
    match recipe.servings {
        Some(servings) => format!("Servings: {}", servings),
        None => format!("Servings: {}", NO_SERVINGS),
    }
}

/// Plain-text cards, one block per recipe in collection order
pub fn render_text(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut output = String::new();
    for recipe in recipes {
        output.push_str(&format!("+ {}\n", recipe.title));
        if let Some(image) = &recipe.image {
            output.push_str(&format!("| image: {}\n", image));
        }
        output.push_str(&format!("| {}\n", servings_label(recipe)));
        output.push_str(&format!("| {}: {}\n", DETAILS_LABEL, recipe.url));
        output.push('\n');
    }
    output
}

/// A self-contained HTML page with the card grid
pub fn render_html(recipes: &[Recipe]) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", PAGE_TITLE));
    html.push_str(STYLE);
    html.push_str("</head>\n<body>\n<main class=\"container\">\n");
    html.push_str(&format!(
        "<header class=\"header\">\n<h1>{}</h1>\n<p class=\"subtitle\">{}</p>\n</header>\n",
        PAGE_TITLE, PAGE_SUBTITLE
    ));

    html.push_str("<section class=\"grid-section\">\n");
    if recipes.is_empty() {
        html.push_str(&format!("<div class=\"empty\">{}</div>\n", EMPTY_STATE));
    } else {
        html.push_str("<div class=\"grid\">\n");
        for recipe in recipes {
            html.push_str(&render_card(recipe));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n</main>\n</body>\n</html>\n");
    html
}

fn render_card(recipe: &Recipe) -> String {
    // A missing image is left to show as a broken image
    let image = recipe.image.as_deref().unwrap_or_default();
    format!(
        concat!(
            "<article class=\"card\" data-id=\"{id}\">\n",
            "<div class=\"card-image\"><img src=\"{image}\" alt=\"{alt}\"></div>\n",
            "<div class=\"card-body\">\n",
            "<h3>{title}</h3>\n",
            "<p class=\"meta\">{servings}</p>\n",
            "<a class=\"details\" href=\"{url}\" target=\"_blank\" rel=\"noreferrer\">{details}</a>\n",
            "</div>\n",
            "</article>\n"
        ),
        id = recipe.id,
        image = encode_double_quoted_attribute(image),
        alt = encode_double_quoted_attribute(&recipe.title),
        title = encode_text(&recipe.title),
        servings = encode_text(&servings_label(recipe)),
        url = encode_double_quoted_attribute(&recipe.url),
        details = DETAILS_LABEL,
    )
}

const STYLE: &str = r#"<style>
body { margin: 0; background: #0f172a; color: #e5e7eb; font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif; }
.container { max-width: 1100px; margin: 0 auto; padding: 48px 16px; }
.header { background: rgba(17, 24, 39, 0.7); border-radius: 16px; padding: 24px; }
.subtitle { color: #9ca3af; font-size: 14px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 16px; margin-top: 24px; }
.card { background: rgba(17, 24, 39, 0.75); border-radius: 14px; overflow: hidden; display: flex; flex-direction: column; }
.card-image img { width: 100%; aspect-ratio: 16 / 10; object-fit: cover; }
.card-body { padding: 14px; }
.meta { color: #9ca3af; font-size: 13px; }
.details { color: #e5e7eb; font-weight: 600; font-size: 13px; }
.empty { margin-top: 24px; color: #9ca3af; text-align: center; }
</style>
"#;
