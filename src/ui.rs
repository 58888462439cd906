use crate::models::AppData;

pub fn render_index(data: &AppData) -> String {
    let (name, press_count) = match data.active_tracker() {
        Some(tracker) => (tracker.name.as_str(), tracker.press_times.len()),
        None => ("No tracker", 0),
    };
    INDEX_HTML
        .replace("{{TRACKER_NAME}}", &escape_html(name))
        .replace("{{PRESS_COUNT}}", &press_count.to_string())
}

/// Tracker names are user input, so they are escaped before being
/// spliced into the page.
fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Pace Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f2;
      --bg-2: #bcd8d0;
      --ink: #24302d;
      --accent: #1f8a70;
      --accent-2: #37474f;
      --danger: #c63b2b;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 138, 112, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #dcefe8 60%, #f2f7f5 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(560px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 26px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
      margin: 0;
      text-align: center;
      flex: 1;
      overflow-wrap: anywhere;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: not-allowed;
    }

    .btn-nav {
      background: rgba(55, 71, 79, 0.1);
      color: var(--accent-2);
      padding: 10px 14px;
    }

    .btn-pace {
      background: var(--accent);
      color: white;
      font-size: 1.2rem;
      padding: 22px;
      width: 100%;
      box-shadow: 0 10px 24px rgba(31, 138, 112, 0.3);
    }

    .btn-ghost {
      background: rgba(55, 71, 79, 0.08);
      color: var(--accent-2);
      font-size: 0.9rem;
    }

    .btn-danger {
      background: transparent;
      color: var(--danger);
      border: 1px solid rgba(198, 59, 43, 0.4);
      font-size: 0.9rem;
    }

    .average {
      background: white;
      border-radius: 20px;
      padding: 24px;
      border: 1px solid rgba(55, 71, 79, 0.08);
      text-align: center;
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .average .caption {
      display: block;
      margin-top: 10px;
      font-size: 0.85rem;
      font-weight: 400;
      color: #6f7a77;
    }

    .history-card {
      background: white;
      border-radius: 20px;
      padding: 18px;
      border: 1px solid rgba(55, 71, 79, 0.08);
      display: grid;
      gap: 12px;
    }

    .history-card h2 {
      margin: 0;
      font-size: 1.1rem;
    }

    #history {
      list-style: none;
      margin: 0;
      padding: 0;
      max-height: 240px;
      overflow-y: auto;
      display: grid;
      gap: 6px;
    }

    #history li {
      padding: 8px 12px;
      border-radius: 10px;
      background: rgba(31, 138, 112, 0.06);
      font-size: 0.92rem;
    }

    .history-controls {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    .tracker-controls {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
      justify-content: center;
    }

    .hidden {
      display: none;
    }

    .status {
      font-size: 0.95rem;
      color: #6b7471;
      min-height: 1.2em;
      text-align: center;
    }

    .status[data-type="error"] {
      color: var(--danger);
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 480px) {
      .app {
        padding: 28px 20px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <button class="btn-nav" id="prevTrackerButton" type="button" aria-label="Previous tracker">&larr;</button>
      <h1 id="trackerName">{{TRACKER_NAME}}</h1>
      <button class="btn-nav" id="nextTrackerButton" type="button" aria-label="Next tracker">&rarr;</button>
    </header>

    <form id="pace-form" method="post" action="/press">
      <button class="btn-pace" id="paceButton" type="submit">Press</button>
    </form>

    <div class="average" id="averageTime">Not enough data yet.</div>

    <section class="history-card">
      <h2>History ({{PRESS_COUNT}} presses)</h2>
      <ul id="history"></ul>
      <div class="history-controls">
        <button class="btn-ghost hidden" id="showMoreButton" type="button">Show more</button>
        <button class="btn-ghost hidden" id="showLessButton" type="button">Show less</button>
        <button class="btn-danger hidden" id="clearHistoryButton" type="button">Clear history</button>
      </div>
    </section>

    <section class="tracker-controls">
      <button class="btn-ghost" id="newTrackerButton" type="button">New tracker</button>
      <button class="btn-danger" id="deleteTrackerButton" type="button" disabled>Delete tracker</button>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const trackerNameEl = document.getElementById('trackerName');
    const paceForm = document.getElementById('pace-form');
    const averageTimeEl = document.getElementById('averageTime');
    const historyEl = document.getElementById('history');
    const showMoreButton = document.getElementById('showMoreButton');
    const showLessButton = document.getElementById('showLessButton');
    const clearHistoryButton = document.getElementById('clearHistoryButton');
    const newTrackerButton = document.getElementById('newTrackerButton');
    const deleteTrackerButton = document.getElementById('deleteTrackerButton');
    const prevTrackerButton = document.getElementById('prevTrackerButton');
    const nextTrackerButton = document.getElementById('nextTrackerButton');
    const statusEl = document.getElementById('status');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const renderSummary = (summary) => {
      trackerNameEl.textContent = summary.tracker_name || 'No tracker';

      if (summary.average) {
        const { days, hours, minutes, seconds } = summary.average;
        averageTimeEl.innerHTML =
          `<div>${days}d ${hours}h ${minutes}m ${seconds}s</div>` +
          '<span class="caption">on average between presses</span>';
      } else {
        averageTimeEl.textContent = 'Not enough data yet.';
      }

      historyEl.innerHTML = '';
      if (summary.history.length === 0) {
        const item = document.createElement('li');
        item.textContent = 'No presses recorded yet.';
        historyEl.appendChild(item);
      } else {
        summary.history.forEach((time) => {
          const item = document.createElement('li');
          item.textContent = new Date(time).toLocaleString();
          historyEl.appendChild(item);
        });
      }

      const heading = document.querySelector('.history-card h2');
      heading.textContent = `History (${summary.press_count} presses)`;

      showMoreButton.classList.toggle('hidden', !summary.can_show_more);
      showLessButton.classList.toggle('hidden', !summary.can_show_less);
      clearHistoryButton.classList.toggle('hidden', !summary.can_clear);
      deleteTrackerButton.disabled = !summary.can_delete;

      if (summary.storage_warning) {
        setStatus(summary.storage_warning, 'error');
      }
    };

    const call = async (path, body) => {
      const options = { method: 'POST' };
      if (body !== undefined) {
        options.headers = { 'content-type': 'application/json' };
        options.body = JSON.stringify(body);
      }
      const res = await fetch(path, options);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      renderSummary(await res.json());
    };

    const refresh = async () => {
      const res = await fetch('/api/tracker');
      if (!res.ok) {
        throw new Error('Unable to load tracker');
      }
      renderSummary(await res.json());
    };

    paceForm.addEventListener('submit', (event) => {
      event.preventDefault();
      call('/api/press').catch((err) => setStatus(err.message, 'error'));
    });

    showMoreButton.addEventListener('click', () => {
      call('/api/history/more').catch((err) => setStatus(err.message, 'error'));
    });

    showLessButton.addEventListener('click', () => {
      call('/api/history/less').catch((err) => setStatus(err.message, 'error'));
    });

    clearHistoryButton.addEventListener('click', () => {
      const accepted = confirm(
        'Are you sure you want to clear the history for this tracker? This action cannot be undone.'
      );
      if (!accepted) {
        return;
      }
      call('/api/history/clear', { confirmed: true }).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    newTrackerButton.addEventListener('click', () => {
      const name = prompt('Enter a name for the new tracker:', 'New Pace');
      if (!name) {
        return;
      }
      call('/api/trackers', { name }).catch((err) => setStatus(err.message, 'error'));
    });

    deleteTrackerButton.addEventListener('click', () => {
      const accepted = confirm(
        `Are you sure you want to delete the "${trackerNameEl.textContent}" tracker?`
      );
      if (!accepted) {
        return;
      }
      call('/api/tracker/delete', { confirmed: true }).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    prevTrackerButton.addEventListener('click', () => {
      call('/api/tracker/switch', { direction: 'prev' }).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    nextTrackerButton.addEventListener('click', () => {
      call('/api/tracker/switch', { direction: 'next' }).catch((err) =>
        setStatus(err.message, 'error')
      );
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_escapes_tracker_name() {
        let mut data = AppData::initial(1_000);
        if let Some(tracker) = data.active_tracker_mut() {
            tracker.name = "<b>Pace & co</b>".to_string();
        }
        let page = render_index(&data);
        assert!(page.contains("&lt;b&gt;Pace &amp; co&lt;/b&gt;"));
        assert!(!page.contains("<b>Pace"));
    }
}
