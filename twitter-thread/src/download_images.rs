use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use crate::entry::{Image, ThreadEntry};
use crate::{ProgressBar, ThreadError};

/// Download every photo of `entries` into `directory`, named by the last path
/// segment of its URL.
///
/// All downloads run concurrently and each one runs to completion. If any of
/// them failed, the first failure in image order is returned. Files that were
/// already written are left in place.
pub async fn download_images<PB: ProgressBar>(
    client: &Client,
    entries: &[ThreadEntry],
    directory: impl AsRef<Path>,
) -> Result<(), ThreadError> {
    log::info!("Downloading images...");

    let directory = directory.as_ref();
    tokio::fs::create_dir_all(directory)
        .await
        .map_err(|e| ThreadError::WriteImage {
            path: directory.to_owned(),
            msg: e.to_string(),
        })?;

    let images: Vec<&Image> = entries.iter().flat_map(|e| &e.images).collect();
    let pb = PB::init(Some(images.len()), "");

    let results = futures::future::join_all(
        images
            .iter()
            .map(|image| download_image(client, image, directory, &pb)),
    )
    .await;

    pb.destroy();

    results.into_iter().collect()
}

async fn download_image<PB: ProgressBar>(
    client: &Client,
    image: &Image,
    directory: &Path,
    pb: &PB,
) -> Result<(), ThreadError> {
    let err_func = |e: reqwest::Error| ThreadError::DownloadImage {
        image_url: image.url.clone(),
        msg: e.to_string(),
    };
    let resp = client
        .get(&image.url)
        .send()
        .await
        .map_err(err_func)?
        .error_for_status()
        .map_err(err_func)?;

    let path = directory.join(&image.filename);
    let io_err_func = |e: std::io::Error| ThreadError::WriteImage {
        path: path.clone(),
        msg: e.to_string(),
    };
    let mut file = tokio::fs::File::create(&path).await.map_err(io_err_func)?;
    let mut stream = resp.bytes_stream();
    while let Some(b) = stream.next().await {
        let chunk = b.map_err(err_func)?;
        file.write_all(&chunk).await.map_err(io_err_func)?;
    }
    file.flush().await.map_err(io_err_func)?;

    pb.increment();

    Ok(())
}
