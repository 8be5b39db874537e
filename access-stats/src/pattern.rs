// Combined log format, captured groups:
// 1. client address
// 2. request path, after one of the supported methods
// 3. status code
// 4. user agent, the quoted field after the referrer
//
// Whitespace and digits are ASCII only: `[\t\n\f\r ]` and `[0-9]`. The
// Unicode `\s` and `\d` classes would accept non-ASCII digits as a status
// and split tokens on no-break spaces.
pub const COMBINED_LOG_PATTERN: &str = r#"^([^\t\n\f\r ]+).*?"(?:GET|POST|PUT|DELETE|HEAD|OPTIONS)[\t\n\f\r ]([^\t\n\f\r ]+).*?"[\t\n\f\r ]([0-9]+).*?"(?:-|[^\t\n\f\r ]+)"[\t\n\f\r ]+"(.+?)""#;
