use crate::models::RankedItem;

pub fn render(title: &str, items: &[RankedItem]) -> String {
    let lines: String = items
        .iter()
        .map(|RankedItem { value, count }| format!("{value} - {count} requests\n"))
        .collect();
    format!("\n{title}:\n{lines}")
}

pub fn print_report(title: &str, items: &[RankedItem]) {
    print!("{}", render(title, items));
}

#[cfg(test)]
mod tests {
    use super::*;
    use asserting::prelude::*;

    #[test]
    fn render_lists_items_under_title() {
        let items = vec![RankedItem::new("/index.html", 12), RankedItem::new("/", 3)];
        assert_that!(render("Top 5 most requested paths", &items)).is_equal_to(
            "\nTop 5 most requested paths:\n/index.html - 12 requests\n/ - 3 requests\n"
                .to_string(),
        );
    }

    #[test]
    fn render_empty_report_keeps_the_header() {
        assert_that!(render("Top 5 user agents", &[]))
            .is_equal_to("\nTop 5 user agents:\n".to_string());
    }
}
