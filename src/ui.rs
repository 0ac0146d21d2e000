pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Micro Steps</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f0;
      --bg-2: #cfe6d8;
      --ink: #24302a;
      --accent: #2e9e6b;
      --accent-soft: #d9f0e4;
      --danger: #c75146;
      --card: rgba(255, 255, 255, 0.92);
      --muted: #6d7a72;
      --shadow: 0 20px 48px rgba(36, 48, 42, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f6faf4 65%, #eef4ef 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: flex;
      justify-content: center;
      padding: 36px 18px 56px;
    }

    .app {
      width: min(760px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: baseline;
      justify-content: space-between;
      gap: 8px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.9rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: var(--muted);
    }

    .panel {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 22px;
    }

    form.add {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: center;
    }

    input[type='text'], input[type='time'] {
      border: 1px solid rgba(36, 48, 42, 0.18);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      background: white;
    }

    input[type='text'] {
      flex: 1 1 220px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 11px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 22px rgba(46, 158, 107, 0.3);
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
      border: 1px solid rgba(36, 48, 42, 0.16);
    }

    .btn-danger {
      background: transparent;
      color: var(--danger);
      border: 1px solid rgba(199, 81, 70, 0.4);
    }

    .habit {
      display: grid;
      gap: 14px;
      padding: 18px 0;
      border-top: 1px solid rgba(36, 48, 42, 0.08);
    }

    .habit:first-of-type {
      border-top: none;
      padding-top: 4px;
    }

    .habit-top {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .habit-name {
      font-size: 1.15rem;
      font-weight: 600;
      margin: 0;
    }

    .reminder {
      font-size: 0.8rem;
      color: var(--muted);
      background: var(--accent-soft);
      border-radius: 999px;
      padding: 4px 10px;
    }

    .week {
      display: flex;
      gap: 8px;
    }

    .day {
      width: 40px;
      display: grid;
      gap: 4px;
      justify-items: center;
      font-size: 0.72rem;
      color: var(--muted);
    }

    .dot {
      width: 26px;
      height: 26px;
      border-radius: 50%;
      border: 2px solid rgba(46, 158, 107, 0.4);
      background: white;
      cursor: pointer;
      padding: 0;
    }

    .dot.done {
      background: var(--accent);
      border-color: var(--accent);
    }

    .dot.today {
      box-shadow: 0 0 0 3px var(--accent-soft);
    }

    .habit-actions {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .insights {
      background: var(--accent-soft);
      border-radius: 14px;
      padding: 12px 14px;
      font-size: 0.92rem;
      white-space: pre-wrap;
    }

    .insights.error {
      background: rgba(199, 81, 70, 0.12);
      color: var(--danger);
    }

    .toolbar {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 10px;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .status.error {
      color: var(--danger);
    }

    .empty {
      color: var(--muted);
      text-align: center;
      padding: 24px 0;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Micro Steps</h1>
      <p class="subtitle">Small habits, every day · {{DATE}}</p>
    </header>

    <section class="panel">
      <form class="add" id="add-form">
        <input type="text" id="add-name" placeholder="New habit, e.g. Drink a glass of water" />
        <input type="time" id="add-time" />
        <button type="submit" class="btn-primary">Add habit</button>
      </form>
    </section>

    <section class="panel">
      <div class="toolbar">
        <span class="status" id="status"></span>
        <button type="button" class="btn-ghost" id="export">Export CSV</button>
      </div>
      <div id="habits"></div>
    </section>
  </div>

  <script>
    const TODAY = '{{DATE}}';
    const DAY_LABELS = ['Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat', 'Sun'];

    const habitsEl = document.getElementById('habits');
    const statusEl = document.getElementById('status');

    const setStatus = (message, kind) => {
      statusEl.textContent = message;
      statusEl.className = kind === 'error' ? 'status error' : 'status';
    };

    const esc = (value) =>
      String(value)
        .replace(/&/g, '&amp;')
        .replace(/</g, '&lt;')
        .replace(/>/g, '&gt;')
        .replace(/'/g, '&#39;');

    const isoDate = (date) => {
      const y = date.getFullYear();
      const m = String(date.getMonth() + 1).padStart(2, '0');
      const d = String(date.getDate()).padStart(2, '0');
      return y + '-' + m + '-' + d;
    };

    const weekDates = () => {
      const today = new Date(TODAY + 'T00:00:00');
      const monday = new Date(today);
      monday.setDate(today.getDate() - ((today.getDay() + 6) % 7));
      return DAY_LABELS.map((_, index) => {
        const date = new Date(monday);
        date.setDate(monday.getDate() + index);
        return isoDate(date);
      });
    };

    const api = async (path, options) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const message = await res.text();
        throw new Error(message || 'Request failed');
      }
      return res;
    };

    const renderHabit = (habit) => {
      const done = new Set(habit.weekly_completions.map((c) => c.date));
      const week = weekDates()
        .map((date, index) => {
          const classes = ['dot'];
          if (done.has(date)) classes.push('done');
          if (date === TODAY) classes.push('today');
          return (
            '<span class="day">' +
            '<button type="button" class="' + classes.join(' ') + '" data-toggle="' + date + '"></button>' +
            DAY_LABELS[index] +
            '</span>'
          );
        })
        .join('');

      const reminder = habit.reminder_time
        ? '<span class="reminder">&#9200; ' + esc(habit.reminder_time) + '</span>'
        : '';
      const doneLabel = habit.completed_today ? 'Done today &#10003;' : 'Mark done today';

      return (
        '<article class="habit" data-id="' + esc(habit.id) + '">' +
        '<div class="habit-top"><p class="habit-name">' + esc(habit.name) + '</p>' + reminder + '</div>' +
        '<div class="week">' + week + '</div>' +
        '<div class="habit-actions">' +
        '<button type="button" class="btn-primary" data-toggle="' + TODAY + '">' + doneLabel + '</button>' +
        '<button type="button" class="btn-ghost" data-insights>Get insights</button>' +
        '<button type="button" class="btn-ghost" data-edit>Edit</button>' +
        '<button type="button" class="btn-danger" data-delete>Delete</button>' +
        '</div>' +
        '<div class="insights" hidden></div>' +
        '</article>'
      );
    };

    let habitCache = [];

    const refresh = async () => {
      const res = await api('/api/habits');
      habitCache = await res.json();
      if (habitCache.length === 0) {
        habitsEl.innerHTML = '<p class="empty">No habits yet. Add your first micro step above.</p>';
        return;
      }
      habitsEl.innerHTML = habitCache.map(renderHabit).join('');
    };

    const toggle = async (id, date) => {
      await api('/api/habits/' + encodeURIComponent(id) + '/toggle', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date })
      });
      await refresh();
    };

    const editHabit = async (id) => {
      const habit = habitCache.find((h) => h.id === id);
      if (!habit) return;
      const name = prompt('Habit name', habit.name);
      if (name === null) return;
      const time = prompt('Reminder time (HH:mm, leave empty for none)', habit.reminder_time || '');
      if (time === null) return;
      await api('/api/habits/' + encodeURIComponent(id), {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name, reminder_time: time })
      });
      await refresh();
    };

    const deleteHabit = async (id) => {
      if (!confirm('Delete this habit and its history?')) return;
      await api('/api/habits/' + encodeURIComponent(id), { method: 'DELETE' });
      await refresh();
    };

    const showInsights = async (id, card) => {
      const panel = card.querySelector('.insights');
      panel.hidden = false;
      panel.classList.remove('error');
      panel.textContent = 'Thinking...';
      const res = await api('/api/habits/' + encodeURIComponent(id) + '/insights', { method: 'POST' });
      const body = await res.json();
      if (body.error) {
        panel.classList.add('error');
        panel.textContent = body.error;
      } else {
        panel.textContent = body.insights;
      }
    };

    habitsEl.addEventListener('click', (event) => {
      const card = event.target.closest('.habit');
      if (!card) return;
      const id = card.dataset.id;

      const run = (task) => task.catch((err) => setStatus(err.message, 'error'));
      if (event.target.dataset.toggle) {
        run(toggle(id, event.target.dataset.toggle));
      } else if ('insights' in event.target.dataset) {
        run(showInsights(id, card));
      } else if ('edit' in event.target.dataset) {
        run(editHabit(id));
      } else if ('delete' in event.target.dataset) {
        run(deleteHabit(id));
      }
    });

    document.getElementById('add-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const nameInput = document.getElementById('add-name');
      const timeInput = document.getElementById('add-time');
      api('/api/habits', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ name: nameInput.value, reminder_time: timeInput.value })
      })
        .then(() => {
          nameInput.value = '';
          timeInput.value = '';
          setStatus('Habit added', '');
          return refresh();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('export').addEventListener('click', () => {
      api('/api/export')
        .then((res) => res.text())
        .then((csv) => {
          if (csv === 'No data to export.') {
            setStatus(csv, '');
            return;
          }
          const blob = new Blob([csv], { type: 'text/csv;charset=utf-8;' });
          const link = document.createElement('a');
          link.href = URL.createObjectURL(blob);
          link.download = 'micro_steps_data.csv';
          link.click();
          URL.revokeObjectURL(link.href);
          setStatus('Export downloaded', '');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    refresh().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
