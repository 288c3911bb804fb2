use cf_cheat_detector_libs::CheckOutcome;

pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn render_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Clean { handle } => format!(
            r#"<div class="result clean">No cheating detected for {}</div>"#,
            escape_html(handle)
        ),
        CheckOutcome::Detected {
            contests,
            unresolved,
            ..
        } => {
            let mut html = String::from(
                r#"<div class="result detected">Cheating Detected In Contests :<ul>"#,
            );
            for contest in contests.iter() {
                html.push_str(&format!(
                    r#"<li><a href="https://codeforces.com/contest/{}">{}</a></li>"#,
                    contest.id,
                    escape_html(&contest.name)
                ));
            }
            for id in unresolved.iter() {
                html.push_str(&format!("<li>Contest {}</li>", id));
            }
            html.push_str("</ul></div>");
            html
        }
        CheckOutcome::Error { message } => format!(
            r#"<div class="result error">{}</div>"#,
            escape_html(message)
        ),
    }
}

/// Render the handle form, followed by the outcome of a check if one was run.
pub fn render_page(handle: &str, outcome: Option<&CheckOutcome>) -> String {
    let result = outcome.map(render_outcome).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Codeforces Cheat Detector</title>
<style>
body {{ font-family: sans-serif; display: flex; justify-content: center; }}
main {{ margin-top: 40px; width: 28rem; padding: 2rem; border: 1px solid black; border-radius: 8px; }}
h1 {{ text-align: center; }}
input, button {{ width: 100%; box-sizing: border-box; padding: 6px; margin-top: 8px; }}
.result {{ text-align: center; margin-top: 8px; }}
.result ul {{ list-style: none; padding: 0; }}
.clean {{ color: #16a34a; }}
.detected, .error {{ color: #ef4444; }}
</style>
</head>
<body>
<main>
<h1>Codeforces Cheat Detector</h1>
<form method="get" action="/">
<label for="handle">CodeForces Handle</label>
<input id="handle" name="handle" type="text" required value="{}">
<button type="submit">Check</button>
</form>
{}
</main>
</body>
</html>
"#,
        escape_html(handle),
        result
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use cf_cheat_detector_libs::detector::FlaggedContest;

    #[test]
    fn escape_special_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
        assert_eq!(escape_html("tourist"), "tourist");
    }

    #[test]
    fn form_only() {
        let html = render_page("", None);

        assert!(html.contains(r#"<input id="handle" name="handle" type="text" required value="">"#));
        assert!(!html.contains(r#"class="result"#));
    }

    #[test]
    fn clean_state() {
        let outcome = CheckOutcome::Clean {
            handle: String::from("tourist"),
        };

        let html = render_page("tourist", Some(&outcome));

        assert!(html.contains("No cheating detected for tourist"));
        assert!(html.contains(r#"value="tourist""#));
    }

    #[test]
    fn detected_state() {
        let outcome = CheckOutcome::Detected {
            handle: String::from("alice"),
            contests: vec![FlaggedContest {
                id: 1790,
                name: String::from("Codeforces Round #847 (Div. 3)"),
                start_at: None,
            }],
            unresolved: vec![],
        };

        let html = render_page("alice", Some(&outcome));

        assert!(html.contains("Cheating Detected In Contests :"));
        assert!(html.contains(
            r#"<li><a href="https://codeforces.com/contest/1790">Codeforces Round #847 (Div. 3)</a></li>"#
        ));
    }

    #[test]
    fn detected_state_lists_unresolved_contests() {
        let outcome = CheckOutcome::Detected {
            handle: String::from("alice"),
            contests: vec![],
            unresolved: vec![100500],
        };

        let html = render_page("alice", Some(&outcome));

        assert!(html.contains("<li>Contest 100500</li>"));
        assert!(!html.contains("<ul></ul>"));
    }

    #[test]
    fn error_state() {
        let outcome = CheckOutcome::Error {
            message: String::from("An error occurred. Please try again."),
        };

        let html = render_page("alice", Some(&outcome));

        assert!(html.contains(r#"<div class="result error">An error occurred. Please try again.</div>"#));
        assert!(!html.contains("No cheating detected"));
    }
}
