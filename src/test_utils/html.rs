use axum::{body::Body, response::Response};
use scraper::{Html, Selector};

async fn body_text(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&body_text(response).await)
}

pub(crate) async fn parse_html_fragment(response: Response<Body>) -> Html {
    Html::parse_fragment(&body_text(response).await)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

/// The text of every element matching `selector`, in document order.
///
/// Text nodes are split on whitespace and the words joined with single
/// spaces, so adjacent cells such as `<td>Food</td><td>$1.00</td>` read
/// "Food $1.00".
#[track_caller]
pub(crate) fn must_select_text(html: &Html, selector: &str) -> Vec<String> {
    let parsed = Selector::parse(selector)
        .unwrap_or_else(|error| panic!("invalid selector {selector:?}: {error:?}"));

    html.select(&parsed)
        .map(|element| {
            element
                .text()
                .flat_map(str::split_whitespace)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::must_select_text;

    #[test]
    fn separates_text_of_adjacent_cells() {
        let html = Html::parse_fragment(
            "<table><tbody><tr><td>Food</td><td>$100.00</td><td>  $80.00 </td></tr></tbody></table>",
        );

        assert_eq!(must_select_text(&html, "tr"), vec!["Food $100.00 $80.00"]);
    }

    #[test]
    fn keeps_text_around_inline_elements() {
        let html = Html::parse_fragment("<p>No transactions yet. <a href=\"/\">Add one</a></p>");

        assert_eq!(must_select_text(&html, "p"), vec!["No transactions yet. Add one"]);
    }
}
