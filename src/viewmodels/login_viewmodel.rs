// ============================================================================
// LOGIN VIEWMODEL - Formularios empleado/admin -> login o alta de cuenta
// ============================================================================

use crate::dom::{listener, DomError, DomEvent, EventKind};
use crate::models::{Credentials, NewUser, User, UserType};
use crate::router::Route;
use crate::services::StoreError;
use crate::state::NavigationState;
use crate::utils::{save_to_storage, APP_BACKGROUND, JWT_STORAGE_KEY, USER_STORAGE_KEY};
use crate::viewmodels::PageContext;

fn role(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Employee => "employee",
        UserType::Admin => "admin",
    }
}

pub fn form_selector(user_type: UserType) -> String {
    format!(r#"form[data-testid="form-{}"]"#, role(user_type))
}

fn input_selector(user_type: UserType, field: &str) -> String {
    format!(r#"input[data-testid="{}-{}-input"]"#, role(user_type), field)
}

/// Página de destino tras autenticarse
pub fn landing_route(user_type: UserType) -> Route {
    match user_type {
        UserType::Employee => Route::Bills,
        UserType::Admin => Route::Dashboard,
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    ctx: PageContext,
    navigation: NavigationState,
}

impl LoginViewModel {
    pub fn new(ctx: PageContext, navigation: NavigationState) -> Self {
        Self { ctx, navigation }
    }

    /// Enlaza los dos formularios (son independientes)
    pub fn init(&self) -> Result<(), DomError> {
        for user_type in [UserType::Employee, UserType::Admin] {
            let vm = self.clone();
            self.ctx.dom.listen(
                &form_selector(user_type),
                EventKind::Submit,
                listener(move |event| vm.handle_submit(event, user_type)),
            )?;
        }
        Ok(())
    }

    pub fn handle_submit(&self, event: &DomEvent, user_type: UserType) {
        event.prevent_default();

        let dom = &self.ctx.dom;
        let email = dom.value(&input_selector(user_type, "email")).unwrap_or_default();
        let password = dom.value(&input_selector(user_type, "password")).unwrap_or_default();
        let user = User::connected(user_type, email, password);

        // La sesión se guarda antes de hablar con el store
        if let Err(e) = save_to_storage(&*self.ctx.storage, USER_STORAGE_KEY, &user) {
            log::error!("❌ [LOGIN] Error guardando usuario: {}", e);
        }

        let vm = self.clone();
        self.ctx.spawn(async move { vm.authenticate(user).await });
    }

    async fn authenticate(&self, user: User) {
        let result = match self.login(&user).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::warn!("⚠️ [LOGIN] Login rechazado ({}), creando cuenta para {}", e, user.email);
                self.create_user(&user).await
            }
        };

        match result {
            Ok(()) => {
                let route = landing_route(user.user_type);
                log::info!("✅ [LOGIN] {} conectado como {}", user.email, user.user_type.as_str());
                self.ctx.navigate(route);
                self.navigation.set_previous_location(route);
                self.ctx.dom.set_body_background(APP_BACKGROUND);
            }
            Err(e) => log::error!("❌ [LOGIN] No se pudo conectar {}: {}", user.email, e),
        }
    }

    /// Sin store no hay nada que verificar
    async fn login(&self, user: &User) -> Result<(), StoreError> {
        let Some(store) = &self.ctx.store else {
            return Ok(());
        };
        let data = serde_json::to_string(&Credentials::from(user))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let response = store.login(data).await?;
        if let Err(e) = self.ctx.storage.set_item(JWT_STORAGE_KEY, &response.jwt) {
            log::error!("❌ [LOGIN] Error guardando jwt: {}", e);
        }
        Ok(())
    }

    async fn create_user(&self, user: &User) -> Result<(), StoreError> {
        let Some(store) = &self.ctx.store else {
            return Ok(());
        };
        let data = serde_json::to_string(&NewUser::from(user))
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        store.create_user(data).await?;
        log::info!("👤 [LOGIN] Usuario {} creado", user.email);
        self.login(user).await
    }
}
