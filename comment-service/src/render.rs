/// Fragment rendering for comments
///
/// Produces the HTML fragment for a single comment and the script payload
/// that appends it to an already-loaded item page. The fragment is escaped
/// for embedding inside a double-quoted JavaScript string so comment bodies
/// cannot break out of the script context.
use crate::models::Comment;

/// Escape text for interpolation into HTML element content or a
/// double-quoted attribute.
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
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

/// Escape text for embedding inside a double-quoted JavaScript string.
///
/// Angle brackets are emitted as unicode escapes so the payload can never
/// contain a literal `</script>`, and the U+2028/U+2029 separators are
/// escaped because they terminate lines in JavaScript source.
pub fn js_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the HTML fragment for a comment, exactly as the full item page
/// would render it.
pub fn comment_fragment(comment: &Comment) -> String {
    format!(
        "<div class=\"comment\" id=\"comment-{id}\">\
<p class=\"comment-author\">{author}</p>\
<p class=\"comment-body\">{body}</p>\
</div>",
        id = comment.id,
        author = html_escape(&comment.author_name),
        body = html_escape(&comment.body),
    )
}

/// Human-readable comment count label.
pub fn count_label(count: i64) -> String {
    if count == 1 {
        "1 comment".to_string()
    } else {
        format!("{count} comments")
    }
}

/// Build the script payload for a fragment-format create response: append
/// the rendered comment to the list, clear the compose field, refresh the
/// counter label.
pub fn fragment_script(comment: &Comment, count: i64) -> String {
    let fragment = comment_fragment(comment);
    format!(
        "$(\"#comments\").append(\"{append}\");\n\
$(\"#comment_body\").val(\"\");\n\
$(\"#comment-count\").text(\"{label}\");\n",
        append = js_escape(&fragment),
        label = js_escape(&count_label(count)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    /// Inverse of `js_escape`, used to check the embedding round-trip.
    fn js_unescape(input: &str) -> String {
        let mut out = String::new();
        let mut chars = input.chars();
        while let Some(ch) = chars.next() {
            if ch != '\\' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('u') => {
                    let hex: String = chars.by_ref().take(4).collect();
                    let code = u32::from_str_radix(&hex, 16).unwrap();
                    out.push(char::from_u32(code).unwrap());
                }
                Some(other) => out.push(other),
                None => break,
            }
        }
        out
    }

    fn comment(author: &str, body: &str) -> Comment {
        Comment {
            id: Uuid::new_v4(),
            item_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            author_name: author.to_string(),
            body: body.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn html_escapes_markup_characters() {
        assert_eq!(
            html_escape("<script>alert(\"hi\") & 'bye'</script>"),
            "&lt;script&gt;alert(&quot;hi&quot;) &amp; &#39;bye&#39;&lt;/script&gt;"
        );
    }

    #[test]
    fn js_escape_leaves_no_raw_angle_brackets_or_quotes() {
        let escaped = js_escape("a\"b\\c<d>e\nf");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(!escaped.contains('\n'));
        assert_eq!(escaped, "a\\\"b\\\\c\\u003cd\\u003ee\\nf");
    }

    #[test]
    fn fragment_contains_escaped_author_and_body() {
        let c = comment("alice", "Where are the handlebars?");
        let fragment = comment_fragment(&c);
        assert!(fragment.contains("alice"));
        assert!(fragment.contains("Where are the handlebars?"));
        assert!(fragment.contains(&format!("comment-{}", c.id)));
    }

    #[test]
    fn embedded_fragment_round_trips_through_escaping() {
        let c = comment("mallory <img>", "\"quotes\" & <tags>\nand newlines");
        let script = fragment_script(&c, 3);

        let start = script.find(".append(\"").unwrap() + ".append(\"".len();
        let end = script[start..].find("\");").unwrap() + start;
        let embedded = &script[start..end];

        assert_eq!(js_unescape(embedded), comment_fragment(&c));
    }

    #[test]
    fn script_clears_compose_field_and_updates_counter() {
        let c = comment("alice", "hi");
        let script = fragment_script(&c, 1);
        assert!(script.contains("$(\"#comment_body\").val(\"\");"));
        assert!(script.contains("$(\"#comment-count\").text(\"1 comment\");"));
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 comments");
        assert_eq!(count_label(1), "1 comment");
        assert_eq!(count_label(2), "2 comments");
    }
}
