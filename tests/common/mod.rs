//! In-process stand-in for the Diário Online backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use diario::diario_auth::SessionStore;
use diario::diario_config::ApiConfig;
use diario::diario_core::{KeyValueStore, MemoryKeyValueStore};
use serde_json::{Value, json};

pub const VALID_EMAIL: &str = "secretaria@escola.edu.br";
pub const VALID_PASSWORD: &str = "senha-forte";
pub const ACCESS_TOKEN: &str = "access-token-1";
pub const REFRESH_TOKEN: &str = "refresh-token-1";

/// What the profile endpoint answers with a valid bearer.
#[derive(Clone, Debug)]
pub enum ProfileReply {
    Ok(Value),
    Unauthorized,
    Malformed,
    ServerError,
}

pub struct StubState {
    pub token_requests: AtomicUsize,
    pub profile_requests: AtomicUsize,
    pub resource_requests: AtomicUsize,
    pub profile: Mutex<ProfileReply>,
    pub last_body: Mutex<Option<Value>>,
    pub last_query: Mutex<Option<HashMap<String, String>>>,
    pub base_url: Mutex<String>,
}

impl StubState {
    pub fn total_requests(&self) -> usize {
        self.token_requests.load(Ordering::SeqCst)
            + self.profile_requests.load(Ordering::SeqCst)
            + self.resource_requests.load(Ordering::SeqCst)
    }

    pub fn set_profile(&self, reply: ProfileReply) {
        *self.profile.lock().unwrap() = reply;
    }

    pub fn last_body(&self) -> Value {
        self.last_body.lock().unwrap().clone().unwrap()
    }

    pub fn last_query(&self) -> HashMap<String, String> {
        self.last_query.lock().unwrap().clone().unwrap()
    }

    fn authorize(&self, headers: &HeaderMap) -> Result<(), Response> {
        self.resource_requests.fetch_add(1, Ordering::SeqCst);
        if authorized(headers) { Ok(()) } else { Err(unauthorized()) }
    }
}

pub struct StubBackend {
    pub base_url: String,
    pub state: Arc<StubState>,
}

impl StubBackend {
    pub async fn start(profile: ProfileReply) -> Self {
        let state = Arc::new(StubState {
            token_requests: AtomicUsize::new(0),
            profile_requests: AtomicUsize::new(0),
            resource_requests: AtomicUsize::new(0),
            profile: Mutex::new(profile),
            last_body: Mutex::new(None),
            last_query: Mutex::new(None),
            base_url: Mutex::new(String::new()),
        });

        let app = Router::new()
            .route("/api/token/", post(issue_token))
            .route("/api/usuario-logado/", get(current_user))
            .route("/salas/api/salas/ano-corrente/", get(current_classrooms))
            .route("/salas/api/salas/", post(create_classroom))
            .route(
                "/salas/api/edit_del_sala/{id}/",
                axum::routing::patch(update_classroom).delete(delete_resource),
            )
            .route("/salas/anos/anos/", get(school_years))
            .route(
                "/salas/alunos_api/alunos/{classroom}/",
                get(classroom_students).post(enroll_student),
            )
            .route("/professor/api/professores/", get(teachers).post(create_teacher))
            .route("/frequencia/api/periodos/", get(periods))
            .route("/frequencia/api_alunos/alunos-frequencia/{classroom}/", get(attendance_roster))
            .route("/frequencia/api/frequencias/criar_bloco/", post(record_attendance))
            .route(
                "/frequencia/api/frequencias/aluno-frequencia/{classroom}/",
                get(attendance_for_day),
            )
            .route("/frequencia/api/frequencias/sala/{classroom}/", get(attendance_for_month))
            .route("/frequencia/api/registros/", get(lesson_records).post(create_lesson_record))
            .route(
                "/frequencia/api/registros/{id}/",
                get(lesson_record).put(update_lesson_record).delete(delete_resource),
            )
            .route("/frequencia/api/relatorios/", get(reports))
            .route("/frequencia/api/relatorios/{id}/", axum::routing::put(update_report))
            .route("/escola/api/minha-escola/", get(school_profile))
            .route("/escola/api/editar/minha-escola/", axum::routing::put(store_body))
            .route("/escola/api/meu-endereco/", get(school_address).put(store_body))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        *state.base_url.lock().unwrap() = format!("http://{addr}/");
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/"),
            state,
        }
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::with_base_url(&self.base_url).timeout(Duration::from_secs(5))
    }

    pub fn session(&self, storage: Arc<MemoryKeyValueStore>) -> SessionStore {
        let storage: Arc<dyn KeyValueStore> = storage;
        SessionStore::new(&self.config(), storage).unwrap()
    }
}

pub fn profile_json(id: i64, name: &str, flags: &[&str]) -> Value {
    let mut profile = json!({
        "id": id,
        "nome": name,
        "email": VALID_EMAIL,
        "is_administrator": false,
        "is_tecnico": false,
        "is_solicitante": false,
        "is_professor": false,
        "is_funcionario": false,
        "is_aluno": false,
    });
    for flag in flags {
        profile[*flag] = Value::Bool(true);
    }
    profile
}

pub fn persisted_pair(access: &str) -> String {
    json!({ "access": access, "refresh": REFRESH_TOKEN }).to_string()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {ACCESS_TOKEN}"))
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "detail": "Given token not valid for any token type" })),
    )
        .into_response()
}

async fn issue_token(State(state): State<Arc<StubState>>, Json(body): Json<Value>) -> Response {
    state.token_requests.fetch_add(1, Ordering::SeqCst);

    if body["email"] == VALID_EMAIL && body["password"] == VALID_PASSWORD {
        Json(json!({ "access": ACCESS_TOKEN, "refresh": REFRESH_TOKEN })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "No active account found with the given credentials" })),
        )
            .into_response()
    }
}

async fn current_user(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.profile_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }

    let reply = state.profile.lock().unwrap().clone();
    match reply {
        ProfileReply::Ok(profile) => Json(profile).into_response(),
        ProfileReply::Unauthorized => unauthorized(),
        ProfileReply::Malformed => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            "{\"nome\": \"sem id\"",
        )
            .into_response(),
        ProfileReply::ServerError => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn current_classrooms(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        { "id": 1, "descricao": "1º Ano A", "turno": "manha", "ano": 3, "ano_descricao": "2024" },
        { "id": 2, "descricao": "2º Ano B", "turno": "tarde", "ano": 3, "ano_descricao": "2024" }
    ]))
    .into_response()
}

async fn create_classroom(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 10,
            "descricao": body["descricao"],
            "turno": body["turno"],
            "ano": body["ano"],
        })),
    )
        .into_response()
}

async fn update_classroom(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    Json(json!({
        "id": id,
        "descricao": body["descricao"],
        "turno": body["turno"],
        "ano": body["ano"],
    }))
    .into_response()
}

async fn delete_resource(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn school_years(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "count": 2,
        "results": [
            { "id": 2, "descricao": "2023" },
            { "id": 3, "descricao": "2024" }
        ]
    }))
    .into_response()
}

async fn classroom_students(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(classroom): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    match classroom {
        // Two pages linked by an absolute `next`.
        3 => {
            let base = state.base_url.lock().unwrap().clone();
            return match params.get("page").map(String::as_str) {
                None => Json(json!({
                    "count": 2,
                    "next": format!("{base}salas/alunos_api/alunos/3/?page=2"),
                    "previous": null,
                    "results": [{ "id": 7, "nome": "Ana Souza", "sexo": "F" }]
                })),
                Some(_) => Json(json!({
                    "count": 2,
                    "next": null,
                    "previous": format!("{base}salas/alunos_api/alunos/3/"),
                    "results": [{ "id": 8, "nome": "Bruno Lima", "sexo": "M" }]
                })),
            }
            .into_response();
        }
        // Continuation link on another host.
        5 => {
            return Json(json!({
                "next": "http://203.0.113.9/salas/alunos_api/alunos/5/?page=2",
                "results": [{ "id": 9, "nome": "Davi Alves" }]
            }))
            .into_response();
        }
        1 => {}
        _ => return Json(json!([])).into_response(),
    }
    Json(json!([
        { "id": 7, "nome": "Ana Souza", "data_nascimento": "2012-03-14", "sexo": "F" },
        { "id": 8, "nome": "Bruno Lima", "data_nascimento": null, "sexo": "M" }
    ]))
    .into_response()
}

async fn enroll_student(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(_classroom): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 99,
            "nome": body["nome"],
            "data_nascimento": body["data_nascimento"],
            "sexo": body["sexo"],
        })),
    )
        .into_response()
}

async fn teachers(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({
        "results": [
            { "id": 4, "professor_nome": "Carla Dias", "email": "carla@escola.edu.br" }
        ]
    }))
    .into_response()
}

async fn create_teacher(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.resource_requests.fetch_add(1, Ordering::SeqCst);
    if !authorized(&headers) {
        return unauthorized();
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 5,
            "professor_nome": body["professor_nome"],
            "email": body["email"],
        })),
    )
        .into_response()
}

async fn periods(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    Json(json!({
        "count": 2,
        "next": null,
        "results": [{ "id": 1, "periodo": 1 }, { "id": 2, "periodo": 2 }]
    }))
    .into_response()
}

async fn attendance_roster(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(_classroom): Path<i64>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    Json(json!([
        { "id": 7, "nome": "Ana Souza" },
        { "id": 8, "nome": "Bruno Lima" }
    ]))
    .into_response()
}

async fn record_attendance(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body);
    (StatusCode::CREATED, Json(json!({ "detail": "Frequências registradas" }))).into_response()
}

async fn attendance_for_day(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(_classroom): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    let recorded = params.get("data").is_some_and(|d| d == "2024-05-06");
    *state.last_query.lock().unwrap() = Some(params);
    if !recorded {
        return Json(json!([])).into_response();
    }
    Json(json!([
        { "id": 50, "aluno": 8, "presente": false, "observacao": "atestado" }
    ]))
    .into_response()
}

async fn attendance_for_month(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(_classroom): Path<i64>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_query.lock().unwrap() = Some(params);
    Json(json!([
        { "data": "2024-05-06", "frequencia_registrada": true },
        { "data": "2024-05-07", "frequencia_registrada": false }
    ]))
    .into_response()
}

fn lesson_record_json(id: i64) -> Value {
    json!({
        "id": id,
        "sala": 1,
        "data": "2024-05-06",
        "data_fim": "2024-05-10",
        "pratica": "Roda de leitura",
        "campo": "Linguagens",
        "objeto": "Contos populares"
    })
}

async fn lesson_records(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_query.lock().unwrap() = Some(params);
    Json(json!({ "count": 1, "next": null, "results": [lesson_record_json(21)] })).into_response()
}

async fn lesson_record(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not found." }))).into_response();
    }
    Json(lesson_record_json(id)).into_response()
}

async fn create_lesson_record(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    let mut created = body;
    created["id"] = json!(22);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_lesson_record(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    let mut updated = body;
    updated["id"] = json!(id);
    Json(updated).into_response()
}

async fn reports(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_query.lock().unwrap() = Some(params);
    Json(json!({
        "count": 1,
        "next": null,
        "results": [{ "id": 31, "aluno": 7, "periodo": 2, "relatorio": "Participativa." }]
    }))
    .into_response()
}

async fn update_report(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body.clone());
    Json(json!({ "id": id, "aluno": 7, "periodo": 2, "relatorio": body["relatorio"] })).into_response()
}

async fn school_profile(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    Json(json!({
        "nome_escola": "EMEF Centro",
        "email": "centro@escola.edu.br",
        "telefone": "(19) 3333-4444",
        "inep": "35012345",
        "cnpj": null,
        "endereco": { "rua": "Rua das Flores", "numero": "100", "cidade": "Campinas", "estado": "SP" }
    }))
    .into_response()
}

async fn school_address(State(state): State<Arc<StubState>>, headers: HeaderMap) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    Json(json!({
        "rua": "Rua das Flores",
        "numero": "100",
        "complemento": null,
        "bairro": "Centro",
        "cep": "13010-000",
        "cidade": "Campinas",
        "estado": "SP"
    }))
    .into_response()
}

async fn store_body(
    State(state): State<Arc<StubState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = state.authorize(&headers) {
        return denied;
    }
    *state.last_body.lock().unwrap() = Some(body);
    StatusCode::OK.into_response()
}

/// Session store logged in against `backend` as a school account.
pub async fn logged_in_session(backend: &StubBackend) -> (SessionStore, Arc<MemoryKeyValueStore>) {
    let storage = Arc::new(MemoryKeyValueStore::new());
    let session = backend.session(Arc::clone(&storage));
    session.restore().await;
    assert!(session.login(VALID_EMAIL, VALID_PASSWORD).await);
    (session, storage)
}
