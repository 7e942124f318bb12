use crate::document::HtmlMode;

const BASE_STYLE: &str = "    body {
      font-family: Arial, sans-serif;
      line-height: 1.6;
      padding: 20px;
      max-width: 800px;
      margin: 0 auto;
    }
";

// Only raw exports contain variable markers.
const VARIABLE_STYLE: &str = "    .variable {
      background-color: #e0f2fe;
      color: #0369a1;
      padding: 0.2em 0.4em;
      border-radius: 0.25em;
      font-family: monospace;
    }
";

const BLOCK_STYLE: &str = "    .terminal {
      background-color: #252525;
      border-radius: 4px;
      padding: 1rem;
      overflow-x: auto;
      border-left: 3px solid #569cd6;
    }
    .terminal code {
      font-family: 'Courier New', monospace;
      color: #d4d4d4;
      white-space: pre;
    }
    pre {
      margin: 0;
    }
    h1 { font-size: 2em; }
    h2 { font-size: 1.5em; }
    h3 { font-size: 1.17em; }
";

/// Wrap an HTML fragment in a complete page.
pub fn page_shell(body: &str, mode: HtmlMode) -> String {
    let title = match mode {
        HtmlMode::Raw => "Raw",
        HtmlMode::Rendered => "Rendered",
    };
    let variable_style = match mode {
        HtmlMode::Raw => VARIABLE_STYLE,
        HtmlMode::Rendered => "",
    };
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
  <meta charset=\"UTF-8\">
  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
  <title>Exported {title} Content</title>
  <style>
{BASE_STYLE}{variable_style}{BLOCK_STYLE}  </style>
</head>
<body>
  {body}
</body>
</html>
"
    )
}
