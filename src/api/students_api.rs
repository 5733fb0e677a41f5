use crate::api::StudentBackend;
use crate::config::{Config, STUDENTS_PATH};
use crate::error::RosterError;
use crate::types::{CreatedStudent, NewStudent, Student};

use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Stateless client for the roster service's student endpoints.
#[derive(Clone)]
pub struct StudentsApi {
    client: reqwest::Client,
    base_url: Url,
}

impl StudentsApi {
    /// `base_url` is the service root; a missing trailing slash is added so
    /// a mount path like `/roster` survives joining.
    pub fn new(client: reqwest::Client, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self { client, base_url }
    }

    /// Build the HTTP client from configuration (timeouts, optional proxy).
    pub fn from_config(cfg: &Config) -> Result<Self, RosterError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("student-roster/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.timeout_secs));
        if let Some(proxy_url) = cfg.proxy.as_ref() {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
        }
        Ok(Self::new(builder.build()?, cfg.base_url.clone()))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Collection URL, with the grade filter encoded as a query pair.
    pub fn students_url(&self, grade: Option<&str>) -> Result<Url, RosterError> {
        let mut url = self.base_url.join(STUDENTS_PATH)?;
        if let Some(grade) = grade {
            url.query_pairs_mut().append_pair("grade", grade);
        }
        Ok(url)
    }

    pub fn student_url(&self, id: i64) -> Result<Url, RosterError> {
        Ok(self.base_url.join(&format!("{STUDENTS_PATH}/{id}"))?)
    }
}

impl StudentBackend for StudentsApi {
    async fn list_students(&self, grade: Option<&str>) -> Result<Vec<Student>, RosterError> {
        let url = self.students_url(grade)?;
        debug!(%url, "GET students");
        let resp = self.client.get(url).send().await?;
        decode_json(resp).await
    }

    async fn get_student(&self, id: i64) -> Result<Student, RosterError> {
        let url = self.student_url(id)?;
        debug!(%url, "GET student");
        let resp = self.client.get(url).send().await?;
        decode_json(resp).await
    }

    async fn create_student(&self, body: &NewStudent) -> Result<CreatedStudent, RosterError> {
        let url = self.students_url(None)?;
        debug!(%url, name = %body.name, "POST student");
        // `.json()` sets `Content-Type: application/json`
        let resp = self.client.post(url).json(body).send().await?;
        decode_json(resp).await
    }
}

/// Any non-2xx status is a failure; error bodies are not inspected.
async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, RosterError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(RosterError::UpstreamStatus(status));
    }
    let body = resp.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> StudentsApi {
        StudentsApi::new(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn collection_url_without_filter() {
        let url = api("http://127.0.0.1:5000").students_url(None).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/students");
    }

    #[test]
    fn grade_filter_is_query_encoded() {
        let api = api("http://127.0.0.1:5000/");
        let url = api.students_url(Some("A")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/students?grade=A");

        let odd = api.students_url(Some("A&B")).unwrap();
        assert_eq!(odd.query(), Some("grade=A%26B"));
    }

    #[test]
    fn item_url_appends_id() {
        let url = api("http://school.test/").student_url(42).unwrap();
        assert_eq!(url.as_str(), "http://school.test/api/students/42");
    }

    #[test]
    fn mount_path_kept_with_or_without_trailing_slash() {
        for base in ["http://gw.test/roster/", "http://gw.test/roster"] {
            let roster = api(base);
            assert_eq!(roster.base_url().as_str(), "http://gw.test/roster/");
            assert_eq!(
                roster.students_url(None).unwrap().as_str(),
                "http://gw.test/roster/api/students"
            );
            assert_eq!(
                roster.student_url(3).unwrap().as_str(),
                "http://gw.test/roster/api/students/3"
            );
        }
    }

    #[test]
    fn from_config_keeps_base_url() {
        let mut cfg = Config::default();
        cfg.base_url = Url::parse("http://school.test:8080/").unwrap();
        cfg.proxy = Some(Url::parse("http://127.0.0.1:3128").unwrap());
        let api = StudentsApi::from_config(&cfg).unwrap();
        assert_eq!(api.base_url().as_str(), "http://school.test:8080/");
    }
}
