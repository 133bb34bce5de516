use axum::{
    http::header,
    response::{Html, IntoResponse},
};

pub async fn dashboard() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=60")],
        Html(DASHBOARD_HTML),
    )
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Aquamon</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/uplot@1.6.31/dist/uPlot.min.css">
    <style>
        :root {
            --bg: #f8fafc;
            --surface: #ffffff;
            --border: #e2e8f0;
            --text: #1e293b;
            --muted: #64748b;
            --accent: #2563eb;
            --ok: #10b981;
            --stale: #f59e0b;
            --off: #ef4444;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: system-ui, -apple-system, sans-serif; background: var(--bg); color: var(--text); min-height: 100vh; }

        .container {
            max-width: 1100px;
            margin: 0 auto;
            padding: 1.5rem;
        }

        header {
            display: flex;
            justify-content: space-between;
            align-items: center;
            margin-bottom: 1.5rem;
            flex-wrap: wrap;
            gap: 1rem;
        }
        h1 { font-size: 1.25rem; font-weight: 600; }

        .window-buttons {
            display: flex;
            gap: 0.5rem;
            flex-wrap: wrap;
        }
        .window-btn {
            padding: 0.5rem 1rem;
            border: 1px solid var(--border);
            border-radius: 0.375rem;
            font-size: 0.875rem;
            background: var(--surface);
            cursor: pointer;
            transition: all 0.15s;
        }
        .window-btn:hover {
            border-color: var(--accent);
            color: var(--accent);
        }
        .window-btn.active {
            background: var(--accent);
            border-color: var(--accent);
            color: white;
        }

        .status-bar {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 0.75rem 1rem;
            margin-bottom: 1rem;
            display: flex;
            align-items: center;
            gap: 0.75rem;
            font-size: 0.875rem;
        }
        .status-dot {
            width: 0.625rem;
            height: 0.625rem;
            border-radius: 50%;
            background: var(--muted);
        }
        .status-dot.connected { background: var(--ok); }
        .status-dot.stale { background: var(--stale); }
        .status-dot.disconnected { background: var(--off); }
        .status-detail { color: var(--muted); }

        .banner {
            display: none;
            background: #fef3c7;
            border: 1px solid #fcd34d;
            border-radius: 0.5rem;
            padding: 0.75rem 1rem;
            margin-bottom: 1rem;
            font-size: 0.875rem;
        }
        .banner.visible { display: block; }

        .charts {
            display: flex;
            flex-direction: column;
            gap: 1rem;
        }
        .chart-card {
            background: var(--surface);
            border: 1px solid var(--border);
            border-radius: 0.5rem;
            padding: 1rem;
        }
        .chart-card h2 {
            font-size: 0.875rem;
            font-weight: 600;
            margin-bottom: 0.5rem;
        }
        .chart-empty {
            color: var(--muted);
            font-size: 0.875rem;
            padding: 2rem 0;
            text-align: center;
        }
    </style>
</head>
<body>
<div class="container">
    <header>
        <h1>Aquamon</h1>
        <div class="window-buttons" id="window-buttons">
            <button class="window-btn active" data-mode="24hours">24 Hours</button>
            <button class="window-btn" data-mode="2days">2 Days</button>
            <button class="window-btn" data-mode="3days">3 Days</button>
            <button class="window-btn" data-mode="1week">1 Week</button>
        </div>
    </header>

    <div class="status-bar">
        <span class="status-dot" id="status-dot"></span>
        <span id="status-text">Device status: loading…</span>
        <span class="status-detail" id="status-detail"></span>
    </div>

    <div class="banner" id="unavailable-banner">
        Telemetry data is currently unavailable. Charts will refresh automatically.
    </div>

    <div class="charts" id="charts"></div>
</div>

<script src="https://cdn.jsdelivr.net/npm/uplot@1.6.31/dist/uPlot.iife.min.js"></script>
<script>
const COLORS = { 'Temperature': '#f08513', 'TDS': '#076cf0', 'pH': '#0bd64f' };
const state = { mode: '24hours', plots: {} };

function renderStatus(status) {
    const dot = document.getElementById('status-dot');
    const text = document.getElementById('status-text');
    const detail = document.getElementById('status-detail');
    dot.className = 'status-dot ' + (status.state === 'stale' ? 'stale' : status.state);
    if (status.state === 'connected') {
        text.textContent = 'Device status: ON';
    } else if (status.state === 'stale') {
        text.textContent = 'Device status: stale';
        detail.textContent = 'last heard ' + new Date(status.last_updated).toLocaleString();
        return;
    } else {
        text.textContent = 'Device status: OFF';
    }
    detail.textContent = '';
}

function renderSeries(series) {
    const container = document.getElementById('charts');
    container.innerHTML = '';
    state.plots = {};

    for (const s of series) {
        const card = document.createElement('div');
        card.className = 'chart-card';
        const title = document.createElement('h2');
        title.textContent = s.label;
        card.appendChild(title);

        if (s.points.length === 0) {
            const empty = document.createElement('div');
            empty.className = 'chart-empty';
            empty.textContent = 'No data in this window';
            card.appendChild(empty);
            container.appendChild(card);
            continue;
        }

        const labels = s.points.map(p => p.t);
        const xs = s.points.map((_, i) => i);
        const ys = s.points.map(p => p.value);

        const plotEl = document.createElement('div');
        card.appendChild(plotEl);
        container.appendChild(card);

        state.plots[s.label] = new uPlot({
            width: plotEl.clientWidth || 1000,
            height: 220,
            scales: { x: { time: false } },
            axes: [
                {
                    values: (u, splits) => splits.map(i => {
                        const label = labels[Math.round(i)];
                        return label ? label.slice(0, 6) : '';
                    })
                },
                {}
            ],
            series: [
                { label: 'time', value: (u, i) => i == null ? '' : labels[Math.round(i)] },
                { label: s.label, stroke: COLORS[s.label] || '#2563eb', width: 2 }
            ],
        }, [xs, ys], plotEl);
    }
}

async function fetchTelemetry() {
    try {
        const res = await fetch('/api/telemetry/' + state.mode);
        if (!res.ok) return;
        const body = await res.json();
        document.getElementById('unavailable-banner').className =
            body.data_available ? 'banner' : 'banner visible';
        renderStatus(body.status);
        renderSeries(body.series);
    } catch (e) {
        console.error('telemetry fetch failed', e);
    }
}

async function fetchStatus() {
    try {
        const res = await fetch('/api/status');
        if (!res.ok) return;
        const body = await res.json();
        renderStatus(body.status);
    } catch (e) {
        console.error('status fetch failed', e);
    }
}

document.getElementById('window-buttons').addEventListener('click', e => {
    const btn = e.target.closest('.window-btn');
    if (!btn) return;
    document.querySelectorAll('.window-btn').forEach(b => b.classList.remove('active'));
    btn.classList.add('active');
    state.mode = btn.dataset.mode;
    fetchTelemetry();
});

fetchTelemetry();
setInterval(fetchStatus, 10000);
setInterval(fetchTelemetry, 60000);
</script>
</body>
</html>"##;
