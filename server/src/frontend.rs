use actix_web::{get, web, HttpResponse, Responder};
use std::path::{Component, Path, PathBuf};

const INDEX: &str = "index.html";

/// Directory holding the trunk build of the frontend.
#[derive(Clone, Debug)]
pub struct Dist(pub PathBuf);

/// Maps a request path onto a file under `root`. Anything other than plain
/// path segments (`..`, absolute paths, prefixes) is refused.
pub fn resolve(root: &Path, filename: &str) -> Option<PathBuf> {
    let filename = match filename.trim_start_matches('/') {
        "" => INDEX,
        filename => filename,
    };

    let relative = Path::new(filename);
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
        .then(|| root.join(relative))
}

#[get("/{filename:.*}")]
pub async fn assets(filename: web::Path<String>, dist: web::Data<Dist>) -> impl Responder {
    let Some(path) = resolve(&dist.0, &filename) else {
        log::warn!("Refusing path outside of the bundle: {}", filename);
        return HttpResponse::NotFound().body("404 - Not Found");
    };

    match tokio::fs::read(&path).await {
        Ok(body) => {
            log::debug!("Serving {}", path.display());
            let mime_type = mime_guess::from_path(&path).first_or_text_plain();
            HttpResponse::Ok()
                .content_type(mime_type.as_ref())
                .body(body)
        }
        Err(err) => {
            log::warn!("Cannot serve {}: {}", path.display(), err);
            HttpResponse::NotFound().body("404 - Not Found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test as actix_test, App};
    use std::fs;

    fn dist(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "chessbet-dist-{}-{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join(INDEX), "<html><body></body></html>").unwrap();
        fs::write(root.join("styles.css"), ".app { margin: 0; }").unwrap();
        fs::write(root.join("assets").join("frontend.js"), "export {};").unwrap();
        root
    }

    #[test]
    fn test_resolve() {
        let root = Path::new("/srv/dist");

        assert_eq!(resolve(root, ""), Some(root.join("index.html")));
        assert_eq!(resolve(root, "/"), Some(root.join("index.html")));
        assert_eq!(resolve(root, "styles.css"), Some(root.join("styles.css")));
        assert_eq!(
            resolve(root, "assets/frontend.js"),
            Some(root.join("assets/frontend.js"))
        );
        assert_eq!(resolve(root, "../Cargo.toml"), None);
        assert_eq!(resolve(root, "assets/../../secret"), None);
        assert_eq!(resolve(root, "./styles.css"), None);
    }

    #[actix_web::test]
    async fn test_serves_index_for_root() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Dist(dist("index"))))
                .service(assets),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/").to_request(),
        )
        .await;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        let body = actix_test::read_body(response).await;
        assert_eq!(body, "<html><body></body></html>");
    }

    #[actix_web::test]
    async fn test_guesses_mime_type() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Dist(dist("mime"))))
                .service(assets),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/styles.css").to_request(),
        )
        .await;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/css"
        );
    }

    #[actix_web::test]
    async fn test_missing_file_is_not_found() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(Dist(dist("missing"))))
                .service(assets),
        )
        .await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/nothing.wasm").to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/assets").to_request(),
        )
        .await;
        assert_eq!(response.status(), 404);
    }
}
