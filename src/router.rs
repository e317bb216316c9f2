use crate::app::AppState;
use crate::domain::ViewState;
use crate::errors::ServerError;
use crate::responses::{html_response, json_response, xlsx_response, ResultResp};
use crate::spreadsheets::export_locations_xlsx;
use crate::templates::pages::{locations_page, LocationsVm};
use astra::Request;
use tracing::debug;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => {
            let view = parse_view(&req)?;
            let rows = view.apply(&state.locations);

            html_response(locations_page(&LocationsVm {
                view: &view,
                rows: &rows,
                total: state.locations.len(),
                fetched_at: state.fetched_at,
                load_error: state.load_error.as_deref(),
            }))
        }
        ("GET", "/locations.json") => {
            let view = parse_view(&req)?;
            json_response(&view.apply(&state.locations))
        }
        ("GET", "/export.xlsx") => {
            let view = parse_view(&req)?;
            let buffer = export_locations_xlsx(&view.apply(&state.locations))?;
            xlsx_response(buffer, "locations.xlsx")
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_view(req: &Request) -> Result<ViewState, ServerError> {
    let query = req.uri().query().unwrap_or("");
    Ok(ViewState::from_query(query)?)
}
