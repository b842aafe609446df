//! Static feature table.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

/// Table of feature rows with a fixed header. Purely presentational.
#[component]
pub fn FeatureTable(headers: Vec<&'static str>, rows: Vec<Vec<&'static str>>) -> impl IntoView {
    view! {
        <div class=css::tableWrapper>
            <table class=css::featureTable>
                <thead>
                    <tr>
                        {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|row| view! {
                        <tr>
                            {row.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
