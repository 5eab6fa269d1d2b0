pub const FOOTER: &str = "Enviado via Email Service - Colmena 2026";

/// Renders the notification body.
///
/// Values are inserted verbatim, without HTML escaping. The relay is meant
/// to sit behind a trusted caller.
pub fn render_html(subject: &str, message: &str, name: Option<&str>, from: Option<&str>) -> String {
  let sender_line = match name {
    Some(name) => format!(
      r#"<p><strong>De:</strong> {} ({})</p>"#,
      name,
      from.unwrap_or("No especificado")
    ),
    None => String::new(),
  };

  let email_line = match from {
    Some(from) => format!(r#"<p><strong>Email:</strong> {}</p>"#, from),
    None => String::new(),
  };

  format!(
    r#"
      <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
        <h2 style="color: #333;">{subject}</h2>
        {sender_line}
        {email_line}
        <hr style="border: 1px solid #eee;" />
        <div style="white-space: pre-wrap; color: #555;">{message}</div>
        <hr style="border: 1px solid #eee;" />
        <p style="font-size: 12px; color: #999;">
          {FOOTER}
        </p>
      </div>
    "#
  )
}
