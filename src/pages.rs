// ABOUTME: HTML templates for the admin console login form and configuration panel
// ABOUTME: Pure string construction; value masking for displayed secrets lives here
//
// SPDX-License-Identifier: Apache-2.0

/// Render the login form, optionally with a message above the fields
pub fn login_form(message: Option<&str>) -> String {
    let banner = message.map_or_else(String::new, |m| format!("<p class=\"error\">{m}</p>"));
    format!(
        r#"<html>
<head>
    <title>Admin Login</title>
    <style>body{{font-family: Arial;}} form{{max-width:300px; margin: 50px auto; padding: 20px; border: 1px solid #ccc; border-radius: 5px;}} input, button{{width: 100%; padding: 10px; margin-bottom: 10px; box-sizing: border-box;}} .error{{color:red;}}</style>
</head>
<body>
    <form method="POST" action="/admin">
        <h2>Admin Login</h2>
        {banner}
        <label for="username">Username:</label>
        <input type="text" id="username" name="username" required>
        <label for="password">Password:</label>
        <input type="password" id="password" name="password" required>
        <button type="submit" name="action" value="login">Login</button>
    </form>
</body>
</html>
"#
    )
}

/// Render the configuration panel with current (masked) values
///
/// `notice` is an informational banner (e.g. after a successful update).
pub fn admin_panel(api_key: &str, cx_id: &str, api_base_url: &str, notice: Option<&str>) -> String {
    let banner = notice.map_or_else(String::new, |m| format!("<p class=\"notice\">{m}</p>"));
    format!(
        r#"<html>
<head>
    <title>Admin Panel</title>
    <style>body{{font-family: Arial;}} form{{margin-bottom: 20px; padding: 15px; border: 1px solid #eee; border-radius: 5px;}} input{{width: 300px; padding: 8px; margin-top: 5px; margin-bottom: 15px;}} button{{padding: 10px 15px;}} .notice{{color:green;}}</style>
</head>
<body>
    <h1>Search API Configuration</h1>
    {banner}
    <p><strong>Current configuration:</strong></p>
    <ul>
        <li>API Key: {api_key}</li>
        <li>CX ID: {cx_id}</li>
        <li>API Base URL: {api_base_url}</li>
    </ul>

    <hr>

    <h2>Update configuration</h2>
    <form method="POST">
        <label for="new_api_key">New API Key:</label><br>
        <input type="text" id="new_api_key" name="new_api_key" required><br>

        <label for="new_cx_id">New CX ID:</label><br>
        <input type="text" id="new_cx_id" name="new_cx_id" required><br>

        <label for="new_api_base_url">New API Base URL:</label><br>
        <input type="text" id="new_api_base_url" name="new_api_base_url" required><br>

        <button type="submit" name="action" value="update_keys">Save</button>
    </form>
    <hr>
    <form method="POST">
        <button type="submit" name="action" value="logout">Log out</button>
    </form>
    <p><small>Username and password are set via environment variables.</small></p>
</body>
</html>
"#
    )
}

/// Mask a stored secret for display: first four and last four characters
/// when the value is long enough, the full value otherwise
pub fn mask_value(value: &str) -> String {
    if value.chars().count() > 8 {
        let head: String = value.chars().take(4).collect();
        let tail: String = value
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("{head}...{tail}")
    } else {
        value.to_owned()
    }
}
