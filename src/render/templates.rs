//! Embedded HTML templates for the dashboard page.
//!
//! Kept as raw string constants and registered into a `Tera` instance at
//! startup; there is no template directory to ship or watch.

pub const BASE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100 text-gray-900 min-h-screen">
    <header class="bg-white border-b border-gray-200 px-6 py-4">
        <h1 class="text-2xl font-bold text-center">{{ title }}</h1>
        <p class="text-sm text-gray-500 text-center">Historical sales analysis ({{ mode }} mode)</p>
    </header>
    <main class="container mx-auto px-6 py-8">
        {% block content %}{% endblock %}
    </main>
</body>
</html>
"#;

pub const INDEX: &str = r#"
{% extends "base.html" %}
{% block content %}
<div class="grid grid-cols-1 md:grid-cols-4 gap-6 mb-8">
    <div class="bg-white rounded-lg shadow p-6">
        <h2 class="text-sm text-gray-500 mb-1">Total Revenue</h2>
        <p class="text-2xl font-bold text-green-600">{{ cards.total_revenue }}</p>
        <p class="text-xs text-gray-400">Accumulated total</p>
    </div>
    <div class="bg-white rounded-lg shadow p-6">
        <h2 class="text-sm text-gray-500 mb-1">Sales</h2>
        <p class="text-2xl font-bold text-blue-600">{{ cards.sale_count }}</p>
        <p class="text-xs text-gray-400">Number of sales</p>
    </div>
    <div class="bg-white rounded-lg shadow p-6">
        <h2 class="text-sm text-gray-500 mb-1">Customers</h2>
        <p class="text-2xl font-bold text-cyan-600">{{ cards.customer_count }}</p>
        <p class="text-xs text-gray-400">Active customers</p>
    </div>
    <div class="bg-white rounded-lg shadow p-6">
        <h2 class="text-sm text-gray-500 mb-1">Average Ticket</h2>
        <p class="text-2xl font-bold text-amber-600">{{ cards.average_ticket }}</p>
        <p class="text-xs text-gray-400">Average value per sale</p>
    </div>
</div>

<div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
    {% for chart in charts %}
    <div class="bg-white rounded-lg shadow p-4">
        {% if chart.type == "chart" %}
        <div id="chart-{{ loop.index }}" class="h-80"></div>
        {% else %}
        <h2 class="font-semibold mb-2">{{ chart.title }}</h2>
        <p class="text-gray-500 italic">{{ no_data_message }}</p>
        {% endif %}
    </div>
    {% endfor %}
</div>

<div class="grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8">
    {% for table in tables %}
    <div class="bg-white rounded-lg shadow p-4">
        <h2 class="font-semibold mb-2">{{ table.title }}</h2>
        {% if table.type == "table" %}
        <table class="w-full text-sm">
            <thead>
                <tr>
                    {% for header in table.headers %}
                    <th class="text-left border-b border-gray-200 py-1 pr-2">{{ header }}</th>
                    {% endfor %}
                </tr>
            </thead>
            <tbody>
                {% for row in table.rows %}
                <tr class="hover:bg-gray-50">
                    {% for cell in row %}
                    <td class="border-b border-gray-100 py-1 pr-2">{{ cell }}</td>
                    {% endfor %}
                </tr>
                {% endfor %}
            </tbody>
        </table>
        {% else %}
        <p class="text-gray-500 italic">{{ no_data_message }}</p>
        {% endif %}
    </div>
    {% endfor %}
</div>

<div class="bg-white rounded-lg shadow p-6">
    <h2 class="font-semibold mb-2">General Statistics</h2>
    <ul class="list-disc list-inside text-sm text-gray-700">
        <li>Products analyzed: {{ summary.products_analyzed }}</li>
        <li>Premium customers identified: {{ summary.premium_customers }}</li>
        <li>Categories with sales: {{ summary.categories_with_sales }}</li>
        <li>Customers in the ranking: {{ summary.ranked_customers }}</li>
    </ul>
    <hr class="my-3">
    <p class="text-sm text-gray-500">Database: {{ summary.recorded_sales }} recorded sales</p>
    <p class="text-sm text-gray-500">Analysis generated at {{ summary.generated_at }}</p>
</div>

<script>
    const charts = {{ charts | json_encode() | safe }};
    charts.forEach((chart, i) => {
        if (chart.type !== "chart") {
            return;
        }
        const el = "chart-" + (i + 1);
        if (chart.kind === "pie") {
            Plotly.newPlot(el, [{
                type: "pie",
                labels: chart.labels,
                values: chart.values,
                hole: 0.4,
                textinfo: "percent+label",
                textposition: "inside",
            }], { title: chart.title });
        } else {
            Plotly.newPlot(el, [{
                type: "bar",
                x: chart.labels,
                y: chart.values,
            }], { title: chart.title, xaxis: { tickangle: -45 } });
        }
    });
</script>
{% endblock %}
"#;
