//! HTML rendering.
//!
//! Pages are plain strings assembled from small fragments.  Every piece of
//! user-supplied text goes through [`escape`] before it is written out.

use axum::http::StatusCode;

use bags::{Bag, Club};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// `GET /bags`
pub fn bag_list(bags: &[Bag]) -> String {
    let body = if bags.is_empty() {
        r#"<p>No bags yet. <a href="/bags/new">Create one</a>.</p>"#.to_owned()
    } else {
        let rows: String = bags.iter().map(bag_row).collect();
        format!(
            r#"<table class="bags">
<thead><tr><th>Id</th><th>Player</th><th>Capacity</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
        )
    };

    layout("Golf Bags", &format!("<h1>Golf Bags</h1>\n{body}"))
}

/// `GET /bags/{id}`
pub fn bag_detail(bag: &Bag) -> String {
    let player = escape(&bag.player);
    let body = format!(
        r#"<h1>{player}'s bag</h1>
{summary}{notice}<h2>Clubs</h2>
{clubs}
<p><a href="/bags/{id}/edit">Add a club</a></p>"#,
        summary = bag_summary(bag),
        notice = capacity_notice(bag),
        clubs = club_list(&bag.clubs),
        id = bag.id,
    );

    layout(&format!("{player}'s bag"), &body)
}

/// `GET /bags/new`
pub fn new_bag_form() -> String {
    let body = r#"<h1>New Golf Bag</h1>
<form method="post" action="/bags">
  <label for="player">Player</label>
  <input type="text" id="player" name="player" required>
  <label for="capacity">Capacity</label>
  <input type="number" id="capacity" name="capacity" min="0" required>
  <button type="submit">Create bag</button>
</form>"#;

    layout("New Golf Bag", body)
}

/// `GET /bags/{id}/edit`
pub fn edit_bag_form(bag: &Bag) -> String {
    let player = escape(&bag.player);
    let body = format!(
        r#"<h1>Add a club to {player}'s bag</h1>
{summary}{notice}<h2>Clubs</h2>
{clubs}
<form method="post" action="/bags/{id}">
  <label for="name">Club name</label>
  <input type="text" id="name" name="name" required>
  <button type="submit">Add club</button>
</form>"#,
        summary = bag_summary(bag),
        notice = capacity_notice(bag),
        clubs = club_list(&bag.clubs),
        id = bag.id,
    );

    layout(&format!("Edit {player}'s bag"), &body)
}

/// Body for any [`crate::ApiError`].
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{reason}</h1>\n<p>{}</p>",
        escape(message)
    );
    layout(reason, &body)
}

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | CaddyShack</title>
</head>
<body>
<nav><a href="/bags">All bags</a> | <a href="/bags/new">New bag</a></nav>
<main>
{body}
</main>
</body>
</html>
"#
    )
}

fn bag_row(bag: &Bag) -> String {
    format!(
        r#"<tr>
  <td class="bag-id">{id}</td>
  <td class="bag-player"><a href="/bags/{id}">{player}</a></td>
  <td class="bag-capacity">{capacity}</td>
  <td><form method="post" action="/bags/delete/{id}"><button type="submit">Delete</button></form></td>
</tr>
"#,
        id = bag.id,
        player = escape(&bag.player),
        capacity = bag.capacity,
    )
}

fn bag_summary(bag: &Bag) -> String {
    format!(
        r#"<dl class="bag">
  <dt>Id</dt><dd class="bag-id">{id}</dd>
  <dt>Player</dt><dd class="bag-player">{player}</dd>
  <dt>Capacity</dt><dd class="bag-capacity">{capacity}</dd>
</dl>
"#,
        id = bag.id,
        player = escape(&bag.player),
        capacity = bag.capacity,
    )
}

fn capacity_notice(bag: &Bag) -> &'static str {
    if bag.is_over_capacity() {
        "<p class=\"over-capacity\">This bag holds more clubs than it is rated for.</p>\n"
    } else {
        ""
    }
}

fn club_list(clubs: &[Club]) -> String {
    if clubs.is_empty() {
        return r#"<p class="no-clubs">No clubs yet.</p>"#.to_owned();
    }

    let items: String = clubs
        .iter()
        .map(|c| format!("  <li class=\"club\">{}</li>\n", escape(&c.name)))
        .collect();
    format!("<ul class=\"clubs\">\n{items}</ul>")
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
