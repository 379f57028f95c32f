// ============================================================================
// LOGIN VIEW - Formularios empleado / administración
// ============================================================================

fn login_form(role: &str, title: &str, form_testid: &str, button_id: &str) -> String {
    format!(
        r#"<div class="part {role}-part">
        <h2 class="part-title">{title}</h2>
        <form class="form-signin" data-testid="{form_testid}">
          <label for="{role}-email-input" class="sr-only">Email</label>
          <input type="email" id="{role}-email-input" class="form-control" data-testid="{role}-email-input" placeholder="johndoe@email.com" required autofocus>
          <label for="{role}-password-input" class="sr-only">Mot de passe</label>
          <input type="password" id="{role}-password-input" class="form-control" data-testid="{role}-password-input" placeholder="******" required>
          <button class="btn btn-lg btn-primary btn-block" id="{button_id}" data-testid="{role}-login-button" type="submit">Se connecter</button>
        </form>
      </div>"#
    )
}

pub fn render_login() -> String {
    format!(
        r#"<div class="login-page">
      <div class="wrapper">
        {employee}
        {admin}
      </div>
    </div>"#,
        employee = login_form("employee", "Employé", "form-employee", "btn-employee"),
        admin = login_form("admin", "Administration", "form-admin", "btn-admin"),
    )
}
