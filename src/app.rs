//! Task Manager App
//!
//! Root component: session + API client context and the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::api::ApiClient;
use crate::components::{AuthGuard, Layout};
use crate::config::AppConfig;
use crate::context::SessionContext;
use crate::pages::{DashboardPage, LandingPage, LoginPage, NotFoundPage, RegisterPage, TaskFormPage};
use crate::session::Session;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = SessionContext::new(Session::browser());

    // Provide context to all pages
    provide_context(session);
    provide_context(ApiClient::new(&config, session));

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/register") view=RegisterPage/>
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <AuthGuard><DashboardPage/></AuthGuard> }
                    />
                    <Route
                        path=path!("/new-task")
                        view=|| view! { <AuthGuard><TaskFormPage/></AuthGuard> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
