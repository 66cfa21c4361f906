//! Print the mock API's OpenAPI document as JSON.

use backend::ApiDoc;
use utoipa::OpenApi;

fn main() {
    match ApiDoc::openapi().to_json() {
        Ok(document) => println!("{document}"),
        Err(e) => eprintln!("failed to render the OpenAPI document: {e}"),
    }
}
