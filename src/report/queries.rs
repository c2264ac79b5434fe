//! SQL text for the report queries.
//!
//! Each builder takes an optional row limit; `None` renders `LIMIT ALL`.
//! Limits are interpolated as-is and never validated here.

/// Renders the `LIMIT` argument.
fn limit_clause(limit: Option<u32>) -> String {
    match limit {
        Some(n) => n.to_string(),
        None => "ALL".to_string(),
    }
}

/// Articles ranked by the number of log hits on `/article/<slug>`.
///
/// Rows: `(title, "<count> views")`, most viewed first.
pub fn popular_articles(limit: Option<u32>) -> String {
    format!(
        r#"
        SELECT articles.title, format('%s %s', count(*), 'views') AS views
            FROM log
                JOIN articles ON log.path = ('/article/' || articles.slug)
            GROUP BY articles.title
            ORDER BY count(*) DESC
            LIMIT {number};
        "#,
        number = limit_clause(limit)
    )
}

/// Authors ranked by the total log hits across all of their articles.
///
/// Rows: `(name, "<count> views")`, most viewed first.
pub fn popular_authors(limit: Option<u32>) -> String {
    format!(
        r#"
        SELECT authors.name, format('%s %s', count(*), 'views') AS views
            FROM log
                JOIN articles ON log.path = ('/article/' || articles.slug)
                JOIN authors ON articles.author = authors.id
            GROUP BY authors.name
            ORDER BY count(*) DESC
            LIMIT {number};
        "#,
        number = limit_clause(limit)
    )
}

/// Calendar days on which more than 1% of requests did not get `200 OK`.
///
/// The rate is computed in `numeric` so fractional percentages survive.
/// Rows: `("July 17, 2016", "2.26% errors")`, lowest rate first.
pub fn days_with_high_error_rate(limit: Option<u32>) -> String {
    format!(
        r#"
        SELECT to_char(daily.day, 'FMMonth DD, YYYY') AS day,
               format('%s%% errors', round(daily.error_rate, 2)) AS errors
            FROM (
                SELECT log.time::date AS day,
                       100.0 * count(*) FILTER (WHERE log.status <> '200 OK')
                           / count(*) AS error_rate
                    FROM log
                    GROUP BY log.time::date
            ) AS daily
            WHERE daily.error_rate > 1
            ORDER BY daily.error_rate ASC
            LIMIT {number};
        "#,
        number = limit_clause(limit)
    )
}
