use crate::api::types::DisplayResult;
use crate::utils::error::{FuelError, Result};
use minijinja::{context, Environment};

pub const INDEX_TEMPLATE_NAME: &str = "index.html";

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Palindromic Fuel Calculator</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            color: #333;
            line-height: 1.6;
        }
        .wrapper { max-width: 900px; margin: 0 auto; padding: 20px; }
        .header { text-align: center; margin-bottom: 40px; color: white; }
        .header h1 { font-size: 3rem; font-weight: 700; margin-bottom: 10px; }
        .card {
            background: white;
            border-radius: 20px;
            padding: 30px;
            margin: 20px 0;
            box-shadow: 0 20px 40px rgba(0,0,0,0.1);
        }
        .card h2 { color: #4f46e5; font-size: 1.8rem; margin-bottom: 20px; }
        .form-row { display: flex; gap: 15px; margin-bottom: 20px; }
        .input-group { flex: 1; }
        .input-group label { display: block; margin-bottom: 8px; font-weight: 500; }
        .input-group input {
            width: 100%;
            padding: 12px 16px;
            border: 2px solid #e5e7eb;
            border-radius: 12px;
            font-size: 16px;
        }
        .btn {
            background: linear-gradient(135deg, #4f46e5 0%, #7c3aed 100%);
            color: white;
            border: none;
            padding: 14px 28px;
            border-radius: 12px;
            font-size: 16px;
            font-weight: 600;
            cursor: pointer;
        }
        .results-grid { display: grid; gap: 15px; margin-top: 25px; }
        .result-card {
            background: #f0f9ff;
            border: 2px solid #0ea5e9;
            border-radius: 16px;
            padding: 20px;
        }
        .result-main { font-size: 1.4rem; font-weight: 700; color: #0f172a; }
        .result-meta { color: #64748b; font-size: 0.9rem; }
        .palindrome-badge {
            background: #d97706;
            color: white;
            padding: 4px 8px;
            border-radius: 20px;
            font-size: 0.75rem;
            margin-left: 8px;
            text-transform: uppercase;
        }
        .error-card {
            background: #fee2e2;
            border: 2px solid #dc2626;
            color: #991b1b;
            padding: 16px;
            border-radius: 12px;
            margin: 20px 0;
        }
        .stats { display: flex; justify-content: space-between; margin-bottom: 20px; }
        .stats-item { text-align: center; }
        .stats-number { font-size: 2rem; font-weight: 700; color: #4f46e5; }
        .stats-label { color: #6b7280; font-size: 0.9rem; text-transform: uppercase; }
        .code-block {
            background: #1f2937;
            color: #e5e7eb;
            padding: 16px;
            border-radius: 8px;
            font-family: monospace;
            font-size: 14px;
            overflow-x: auto;
            margin: 10px 0;
        }
        @media (max-width: 768px) {
            .form-row, .stats { flex-direction: column; }
        }
    </style>
</head>
<body>
    <div class="wrapper">
        <div class="header">
            <h1>Palindromic Fuel Calculator</h1>
            <p>Discover fuel costs that read the same forwards and backwards!</p>
        </div>

        <div class="card">
            <h2>Calculate Palindromes</h2>
            <form method="POST">
                <div class="form-row">
                    <div class="input-group">
                        <label for="price">Price per {{ unit_singular }} (minor units)</label>
                        <input type="number" id="price" name="price" step="0.01" placeholder="128.9" value="{{ price }}" required>
                    </div>
                    <div class="input-group">
                        <label for="max">Maximum {{ unit }}</label>
                        <input type="number" id="max" name="max" placeholder="100" value="{{ max }}" required>
                    </div>
                </div>
                <button type="submit" class="btn">Calculate Palindromes</button>
            </form>
        </div>

        {% if error %}
        <div class="error-card">
            <strong>Error:</strong> {{ error }}
        </div>
        {% endif %}

        {% if results %}
        <div class="card">
            <div class="stats">
                <div class="stats-item">
                    <div class="stats-number">{{ results | length }}</div>
                    <div class="stats-label">Palindromes Found</div>
                </div>
                <div class="stats-item">
                    <div class="stats-number">{{ price }}</div>
                    <div class="stats-label">Price per {{ unit_singular }}</div>
                </div>
                <div class="stats-item">
                    <div class="stats-number">{{ max }}</div>
                    <div class="stats-label">Max {{ unit }}</div>
                </div>
            </div>

            <h2>Results</h2>

            <div class="results-grid">
                {% for result in results %}
                <div class="result-card">
                    <div class="result-main">
                        {{ result.formatted_volume }} {{ unit }} = {{ currency }}{{ result.cost_major_units }}
                        {% if result.volume_is_palindromic %}<span class="palindrome-badge">Palindrome</span>{% endif %}
                    </div>
                    <div class="result-meta">
                        {% if not result.volume_is_palindromic %}Whole Number {{ unit }}
                        {% elif result.kind == "palindromic_decimal" %}Palindromic Decimal {{ unit }}
                        {% else %}Palindromic Whole {{ unit }}{% endif %}
                    </div>
                </div>
                {% endfor %}
            </div>
        </div>
        {% endif %}

        <div class="card">
            <h2>API Access</h2>
            <p>GET request:</p>
            <div class="code-block">curl "http://{{ address }}/api/calculate?price=128.9&amp;max=100"</div>
            <p>POST request:</p>
            <div class="code-block">curl -X POST http://{{ address }}/api/calculate -H "Content-Type: application/json" -d '{"pricePerVolume": 128.9, "maxVolume": 100}'</div>
        </div>
    </div>
</body>
</html>
"#;

/// Builds the template environment once at router construction.
pub fn environment() -> Result<Environment<'static>> {
    let mut env = Environment::new();
    env.add_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)
        .map_err(template_error)?;
    Ok(env)
}

/// Values shown on the form page.
#[derive(Debug, Default)]
pub struct IndexView {
    pub results: Vec<DisplayResult>,
    pub error: Option<String>,
    pub price: String,
    pub max: String,
}

pub struct PageLabels<'a> {
    pub currency: &'a str,
    pub unit: &'a str,
    pub address: &'a str,
}

pub fn render_index(env: &Environment<'_>, labels: &PageLabels<'_>, view: &IndexView) -> Result<String> {
    let template = env
        .get_template(INDEX_TEMPLATE_NAME)
        .map_err(template_error)?;
    template
        .render(context! {
            results => view.results,
            error => view.error,
            price => view.price,
            max => view.max,
            currency => labels.currency,
            unit => labels.unit,
            unit_singular => labels.unit.strip_suffix('s').unwrap_or(labels.unit),
            address => labels.address,
        })
        .map_err(template_error)
}

fn template_error(e: minijinja::Error) -> FuelError {
    FuelError::ServerError {
        message: format!("Template error: {}", e),
    }
}
