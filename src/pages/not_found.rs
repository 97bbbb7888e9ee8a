use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Página não encontrada."}</p>
            <Link<Route> to={Route::Home} classes="back-home">
                {"Voltar para a página inicial"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    background: #ffffff;
                    color: #1a202c;
                    font-family: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
                    text-align: center;
                    padding: 0 1.5rem;
                }

                .not-found h1 {
                    margin: 0;
                    font-size: 4rem;
                    color: #1e3a5f;
                }

                .not-found p {
                    margin: 0;
                    font-size: 1.1rem;
                    color: #5a6575;
                }

                .back-home {
                    margin-top: 1rem;
                    color: #1e3a5f;
                    font-weight: 600;
                    text-decoration: underline;
                }

                .back-home:hover {
                    color: #16304f;
                }
                "#}
            </style>
        </div>
    }
}
