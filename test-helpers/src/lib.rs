pub mod backend;
pub mod mock;
pub mod telemetry;

use actix_web::web;
use anyhow::Context;
use payloads::{
    APIClient, Cancellation, InMemorySession, PoliticalPartyId, requests,
    responses,
};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

use backend::{Config, store::Store};

pub struct TestApp {
    pub port: u16,
    pub client: APIClient,
    /// Session used for every request the helpers make.
    pub session: InMemorySession,
    pub cancel: Cancellation,
    /// Direct access to the backend's tables.
    pub store: web::Data<Store>,
}

impl TestApp {
    pub fn address(&self) -> &str {
        &self.client.address
    }

    /// Sign up alice and keep her session.
    pub async fn create_alice_user(
        &self,
    ) -> anyhow::Result<responses::Session> {
        self.sign_up(&alice_account()).await
    }

    pub async fn create_bob_user(&self) -> anyhow::Result<responses::Session> {
        self.sign_up(&bob_account()).await
    }

    pub async fn login_alice(&self) -> anyhow::Result<responses::Session> {
        self.sign_in(&alice_credentials()).await
    }

    pub async fn sign_up(
        &self,
        details: &requests::NewAccount,
    ) -> anyhow::Result<responses::Session> {
        Ok(self
            .client
            .register(details, &self.session, &self.cancel)
            .await?)
    }

    pub async fn sign_in(
        &self,
        credentials: &requests::Credentials,
    ) -> anyhow::Result<responses::Session> {
        Ok(self
            .client
            .login(credentials, &self.session, &self.cancel)
            .await?)
    }

    /// Make the backend forget every token it issued, so the next
    /// authenticated request is answered with a 401.
    pub fn expire_sessions(&self) {
        self.store.revoke_all_tokens();
    }

    pub async fn create_test_party(
        &self,
    ) -> anyhow::Result<responses::PoliticalParty> {
        let parties = self.client.political_parties();
        parties
            .create(&party_details_a(), &self.session, &self.cancel)
            .await?;
        let created = parties
            .find(&self.session, &self.cancel)
            .await?
            .pop()
            .context("created party missing from list")?;
        assert_eq!(created.party_details, party_details_a());
        Ok(created)
    }

    pub async fn create_test_candidate(
        &self,
        party_id: PoliticalPartyId,
    ) -> anyhow::Result<responses::Candidate> {
        let candidates = self.client.candidates();
        let details = candidate_details_a(party_id);
        candidates
            .create(&details, &self.session, &self.cancel)
            .await?;
        let created = candidates
            .find(&self.session, &self.cancel)
            .await?
            .pop()
            .context("created candidate missing from list")?;
        assert_eq!(created.candidate_details, details);
        Ok(created)
    }

    pub async fn create_test_campaign(
        &self,
    ) -> anyhow::Result<responses::Campaign> {
        let campaigns = self.client.campaigns();
        campaigns
            .create(&campaign_details_a(), &self.session, &self.cancel)
            .await?;
        let created = campaigns
            .find(&self.session, &self.cancel)
            .await?
            .pop()
            .context("created campaign missing from list")?;
        assert_eq!(created.campaign_details, campaign_details_a());
        Ok(created)
    }
}

pub fn alice_account() -> requests::NewAccount {
    requests::NewAccount {
        email: "alice@example.com".into(),
        password: "supersecret".into(),
        full_name: "Alice Moreno".into(),
    }
}

pub fn alice_credentials() -> requests::Credentials {
    to_credentials(&alice_account())
}

pub fn bob_account() -> requests::NewAccount {
    requests::NewAccount {
        email: "bob@example.com".into(),
        password: "bobspw".into(),
        full_name: "Bob Quispe".into(),
    }
}

pub fn bob_credentials() -> requests::Credentials {
    to_credentials(&bob_account())
}

fn to_credentials(account: &requests::NewAccount) -> requests::Credentials {
    requests::Credentials {
        email: account.email.clone(),
        password: account.password.clone(),
    }
}

pub fn campaign_details_a() -> payloads::Campaign {
    payloads::Campaign {
        name: "Municipal Elections 2026".into(),
        description: "Mayoral and council races".into(),
        start_date: "2026-02-01".into(),
        end_date: "2026-10-04".into(),
        candidate_ids: Vec::new(),
    }
}

pub fn campaign_details_b() -> payloads::Campaign {
    payloads::Campaign {
        name: "Regional Referendum".into(),
        description: "Autonomy statute vote".into(),
        start_date: "2026-03-15".into(),
        end_date: "2026-05-30".into(),
        candidate_ids: Vec::new(),
    }
}

pub fn party_details_a() -> payloads::PoliticalParty {
    payloads::PoliticalParty {
        name: "Civic Renewal Party".into(),
        abbreviation: "CRP".into(),
        foundation_date: "2004-09-21".into(),
        ideology: "Centrism".into(),
        description: "Reform-minded centrist party".into(),
        logo: "https://example.com/crp.png".into(),
    }
}

pub fn candidate_details_a(
    political_party_id: PoliticalPartyId,
) -> payloads::Candidate {
    payloads::Candidate {
        name: "Lucia".into(),
        last_name: "Fernandez".into(),
        identification: "CC-10293847".into(),
        contact_info: "lucia.fernandez@example.com".into(),
        photo: "https://example.com/lucia.jpg".into(),
        political_party_id,
        position: "Mayor".into(),
        experience: "Two terms as city councillor".into(),
        biography: "Civil engineer and neighbourhood organiser".into(),
        education: "MSc Urban Planning".into(),
        campaign_platform: "Public transit and housing".into(),
    }
}

/// Start the backend described by `config` on the current tokio runtime.
pub fn spawn_app_with(mut config: Config) -> anyhow::Result<TestApp> {
    let store = web::Data::new(Store::default());
    let server = backend::build(&mut config, store.clone())?;
    tokio::spawn(server);

    let address = format!("http://{}:{}", config.ip, config.port);
    Ok(TestApp {
        port: config.port,
        client: APIClient {
            address,
            inner_client: reqwest::Client::new(),
        },
        session: InMemorySession::new(),
        cancel: Cancellation::new(),
        store,
    })
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let config = Config {
        port,
        ..Config::default()
    };
    spawn_app_with(config).expect("Failed to start backend")
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> APIClient {
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|address| address.port())
        .expect("Failed to reserve a port");
    APIClient {
        address: format!("http://127.0.0.1:{port}"),
        inner_client: reqwest::Client::new(),
    }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
