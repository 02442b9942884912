//! Downloads table view.

use fetchboard_api_models::StatusKind;
use yew::prelude::*;

use crate::features::downloads::state::DownloadRow;

/// Properties for [`DownloadsTable`].
#[derive(Properties, PartialEq)]
pub struct DownloadsTableProps {
    /// Rows in table order.
    pub rows: Vec<DownloadRow>,
}

/// Live table of download jobs, keyed by row id so updates keep position.
#[function_component(DownloadsTable)]
pub fn downloads_table(props: &DownloadsTableProps) -> Html {
    html! {
        <table class="downloads">
            <thead>
                <tr>
                    <th>{"ID"}</th>
                    <th>{"URL"}</th>
                    <th>{"File Name"}</th>
                    <th>{"File Size"}</th>
                    <th>{"Start Time"}</th>
                    <th>{"End Time"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(render_row) }
            </tbody>
        </table>
    }
}

fn render_row(row: &DownloadRow) -> Html {
    let badge = format!(
        "status status-{}",
        StatusKind::classify(&row.status).css_class()
    );
    html! {
        <tr key={row.id.to_string()}>
            <td>{row.id}</td>
            <td class="url">{row.url.clone()}</td>
            <td>{row.file_name.clone()}</td>
            <td>{row.file_size.clone()}</td>
            <td>{row.start_time.clone()}</td>
            <td>{row.end_time.clone()}</td>
            <td><span class={badge}>{row.status.clone()}</span></td>
        </tr>
    }
}
