use crate::config::Config;
use anyhow::Context;
use domain::models::{
    Appointment, DashboardOverview, Doctor, EmergencyCases, NewAppointment, NewPatient, Patient,
    PatientQuery, PatientTotal,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::types::Result;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Typed client for the backend's plain REST resources (everything except
/// the chat endpoint): patients, doctors, appointments, admin views.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_root: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            client,
            api_root: config.api_root(),
        })
    }

    pub async fn register_patient(&self, patient: &NewPatient) -> Result<Patient> {
        self.post_json(&self.url("/patients/register"), patient)
            .await
    }

    pub async fn lookup_patients(&self, query: &PatientQuery) -> Result<Vec<Patient>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(email) = &query.email {
            params.push(("email", email));
        }
        if let Some(phone) = &query.phone {
            params.push(("phone", phone));
        }
        if let Some(patient_id) = &query.patient_id {
            params.push(("patient_id", patient_id));
        }

        let url = self.url("/patients/lookup");
        debug!(%url, "looking up patients");
        let response = self
            .client
            .post(&url)
            .query(&params)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", url))?;
        Self::decode(response).await
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        self.get_json(&self.url("/doctors")).await
    }

    pub async fn create_appointment(&self, appointment: &NewAppointment) -> Result<Appointment> {
        self.post_json(&self.url("/appointments/"), appointment)
            .await
    }

    pub async fn patient_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>> {
        self.get_json(&self.url(&format!("/appointments/patient/{}", patient_id)))
            .await
    }

    pub async fn dashboard_overview(&self) -> Result<DashboardOverview> {
        self.get_json(&self.url("/admin/dashboard/overview")).await
    }

    pub async fn emergency_cases(&self, days: u32) -> Result<EmergencyCases> {
        self.get_json(&format!(
            "{}?days={}",
            self.url("/admin/emergency-cases"),
            days
        ))
        .await
    }

    pub async fn total_patients(&self) -> Result<PatientTotal> {
        self.get_json(&self.url("/admin/patients/total")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", url))?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        debug!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", url))?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("backend returned {}: {}", status, body);
        }
        response
            .json::<T>()
            .await
            .context("failed to decode the backend response")
    }
}
