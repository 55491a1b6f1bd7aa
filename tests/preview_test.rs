//! プレビュー（サムネイル一時ファイル）のライフサイクルテスト

use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::tempdir;
use text_grabber::extractor::HttpExtractor;
use text_grabber::preview::ThumbnailPreviews;
use text_grabber::session::Session;
use text_grabber_common::{EndpointConfig, WidgetState};

/// 実際にデコード可能なPNGを書き出す
fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, Rgb([200, 30, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, buf.into_inner()).unwrap();
    path
}

fn preview_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect()
}

fn session(previews: ThumbnailPreviews) -> Session<HttpExtractor, ThumbnailPreviews> {
    let endpoint = EndpointConfig::new("http://127.0.0.1:9/").unwrap();
    Session::new(HttpExtractor::new(endpoint), previews, Duration::from_secs(1))
}

/// 選択でサムネイルが作られ、長辺が縮小される
#[test]
fn test_preview_created_on_select() {
    let images = tempdir().unwrap();
    let previews_dir = tempdir().unwrap();
    let mut session = session(ThumbnailPreviews::new(previews_dir.path()).unwrap().with_max_edge(32));

    let path = write_png(images.path(), "wide.png", 128, 64);
    session.select_path(&path).unwrap();

    let preview = session.widget().preview().expect("プレビューがない").clone();
    assert!(preview.exists());
    let thumb = image::open(&preview).unwrap();
    assert_eq!(thumb.width(), 32);
    assert_eq!(thumb.height(), 16);
}

/// 2回差し替えた後は最新のプレビューだけが残る
#[test]
fn test_only_latest_preview_survives() {
    let images = tempdir().unwrap();
    let previews_dir = tempdir().unwrap();
    let mut session = session(ThumbnailPreviews::new(previews_dir.path()).unwrap());

    for name in ["a.png", "b.png", "c.png"] {
        let path = write_png(images.path(), name, 8, 8);
        session.select_path(&path).unwrap();
    }

    let files = preview_files(previews_dir.path());
    assert_eq!(files.len(), 1);
    assert_eq!(Some(&files[0]), session.widget().preview());
}

/// クリアとセッション破棄でプレビューが消える
#[test]
fn test_preview_removed_on_clear_and_drop() {
    let images = tempdir().unwrap();
    let previews_dir = tempdir().unwrap();
    let mut session = session(ThumbnailPreviews::new(previews_dir.path()).unwrap());

    let path = write_png(images.path(), "a.png", 8, 8);
    session.select_path(&path).unwrap();
    session.clear();
    assert_eq!(session.widget().state(), WidgetState::Empty);
    assert!(preview_files(previews_dir.path()).is_empty());

    session.select_path(&path).unwrap();
    assert_eq!(preview_files(previews_dir.path()).len(), 1);
    drop(session);
    assert!(preview_files(previews_dir.path()).is_empty());
}

/// デコードできない画像でも選択自体は成功する
#[test]
fn test_undecodable_image_selected_without_preview() {
    let images = tempdir().unwrap();
    let previews_dir = tempdir().unwrap();
    let mut session = session(ThumbnailPreviews::new(previews_dir.path()).unwrap());

    // PNGシグネチャのみで本体が壊れている
    let path = images.path().join("broken.png");
    std::fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
    session.select_path(&path).unwrap();

    assert_eq!(session.widget().state(), WidgetState::Selected);
    assert!(session.widget().preview().is_none());
    assert!(preview_files(previews_dir.path()).is_empty());
}
