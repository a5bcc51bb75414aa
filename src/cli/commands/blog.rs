//! Blog command handler

use crate::models::Article;
use crate::models::format::format_long_date;
use crate::services::BlogQuery;
use crate::state::SharedState;

fn print_article(article: &Article) {
    println!("{}", article.title);
    println!(
        "  ID: {} | {} | {} | {} | {} min read",
        article.id,
        article.category.as_str(),
        article.author,
        format_long_date(article.date),
        article.read_time
    );
}

pub fn cmd_blog(state: &SharedState, query: &BlogQuery) -> anyhow::Result<()> {
    let results = state.blog.search(query);

    if results.total == 0 {
        println!("No articles found.");
        return Ok(());
    }

    if !results.featured.is_empty() {
        println!("Featured Articles");
        println!("{:-<70}", "");
        for article in &results.featured {
            print_article(article);
        }
        println!();
    }

    if !results.regular.is_empty() {
        println!("Latest Articles");
        println!("{:-<70}", "");
        for article in &results.regular {
            print_article(article);
        }
    }

    Ok(())
}
