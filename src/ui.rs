use crate::models::{MenuRow, ViewSnapshot};

pub fn render_index(view: &ViewSnapshot) -> String {
    let detail = view.detail.as_ref();
    let text = |value: Option<&String>| value.map(|v| escape_html(v)).unwrap_or_default();

    let buy_disabled = detail.is_none_or(|d| d.button_disabled);

    INDEX_HTML
        .replace("{{TITLE}}", &text(detail.map(|d| &d.title)))
        .replace("{{RUNTIME}}", &text(detail.map(|d| &d.runtime)))
        .replace("{{DESCRIPTION}}", &text(detail.map(|d| &d.description)))
        .replace("{{SHOWTIME}}", &text(detail.map(|d| &d.showtime)))
        .replace("{{TICKETS}}", &text(detail.map(|d| &d.tickets)))
        .replace("{{POSTER}}", &text(detail.map(|d| &d.poster)))
        .replace("{{BUY_LABEL}}", detail.map(|d| d.button_label).unwrap_or_default())
        .replace("{{BUY_DISABLED}}", if buy_disabled { " disabled" } else { "" })
        .replace("{{MENU}}", &render_menu(&view.menu))
}

pub fn render_menu(rows: &[MenuRow]) -> String {
    rows.iter()
        .map(|row| {
            let path = urlencoding::encode(row.id.as_str());
            format!(
                r#"<li class="film item" data-id="{id}">
          <form method="post" action="/films/{path}/select"><button class="film-title" type="submit">{title}</button></form>
          <form method="post" action="/films/{path}/delete"><button class="delete-button" type="submit">Delete</button></form>
        </li>"#,
                id = escape_html(row.id.as_str()),
                title = escape_html(&row.title),
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Film Tickets</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      grid-template-columns: minmax(200px, 1fr) 2fr;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    #films {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .film.item {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 8px;
      background: white;
      border-radius: 14px;
      padding: 8px 10px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    .film.item form {
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
    }

    .film-title {
      background: transparent;
      color: var(--accent-2);
      text-align: left;
    }

    .delete-button {
      background: rgba(198, 59, 43, 0.1);
      color: #c63b2b;
      padding: 6px 12px;
    }

    .detail {
      display: grid;
      gap: 12px;
    }

    #poster {
      width: 100%;
      max-width: 260px;
      border-radius: 18px;
    }

    .meta {
      color: #5f5c57;
      margin: 0;
    }

    #buy-ticket {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    #buy-ticket:disabled {
      background: #b9b2aa;
      box-shadow: none;
      cursor: not-allowed;
    }

    @media (max-width: 700px) {
      .app {
        grid-template-columns: 1fr;
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <nav>
      <ul id="films">
        {{MENU}}
      </ul>
    </nav>

    <section class="detail">
      <h1 id="title">{{TITLE}}</h1>
      <img id="poster" src="{{POSTER}}" alt="{{TITLE}}" />
      <p id="runtime" class="meta">{{RUNTIME}}</p>
      <p id="film-info">{{DESCRIPTION}}</p>
      <p id="showtime" class="meta">{{SHOWTIME}}</p>
      <p id="ticket-num" class="meta">{{TICKETS}}</p>
      <form method="post" action="/buy">
        <button id="buy-ticket" type="submit"{{BUY_DISABLED}}>{{BUY_LABEL}}</button>
      </form>
    </section>
  </main>
</body>
</html>
"#;
