//! Service HTTP pour l'envoi d'images vers l'endpoint de prédiction

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::types::{PredictError, PredictResponse, PredictResult};

/// Envoie une image au backend et décode le verdict JSON.
///
/// La réponse est décodée quel que soit le status HTTP: le backend
/// signale ses refus via le champ `error` du corps, pas via le status.
pub async fn predict_image(file: &File, endpoint: &str) -> PredictResult<PredictResponse> {
    // Créer FormData
    let form_data = FormData::new()
        .map_err(|e| PredictError::Request(format!("Failed to create FormData: {:?}", e)))?;

    // Ajouter le fichier
    form_data
        .append_with_blob("file", file)
        .map_err(|e| PredictError::Request(format!("Failed to append file: {:?}", e)))?;

    // Envoyer la requête
    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| PredictError::Request(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| PredictError::Request(format!("HTTP request failed: {}", e)))?;

    // Parser la réponse JSON
    response
        .json::<PredictResponse>()
        .await
        .map_err(|e| PredictError::Decode(format!("Failed to parse response: {}", e)))
}
