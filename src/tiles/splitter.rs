use super::types::{Trickplay, TrickplayInfo};
use image::{imageops, RgbaImage};
use log::debug;

/// Cut a tile sheet into thumbnails, row by row.
///
/// Cells that do not fit entirely inside the sheet are dropped, which happens
/// on the last, partially filled sheet when the server crops it.
pub fn split_tile_sheet(sheet: &RgbaImage, info: &TrickplayInfo) -> Vec<RgbaImage> {
    if info.width == 0 || info.height == 0 {
        return Vec::new();
    }

    // The grid comes from the server; only cells inside the sheet are cut.
    let columns = info.tile_width.min(sheet.width() / info.width);
    let rows = info.tile_height.min(sheet.height() / info.height);
    let mut thumbnails = Vec::with_capacity(columns as usize * rows as usize);

    for row in 0..rows {
        let y = row * info.height;
        for column in 0..columns {
            let x = column * info.width;
            thumbnails.push(imageops::crop_imm(sheet, x, y, info.width, info.height).to_image());
        }
    }
    thumbnails
}

/// Split every sheet and keep at most `thumbnail_count` thumbnails.
pub fn build_trickplay(sheets: &[RgbaImage], info: &TrickplayInfo) -> Trickplay {
    let mut images: Vec<RgbaImage> = sheets
        .iter()
        .flat_map(|sheet| split_tile_sheet(sheet, info))
        .collect();
    images.truncate(info.thumbnail_count as usize);
    debug!(
        "Split {} sheets into {} trickplay thumbnails",
        sheets.len(),
        images.len()
    );

    Trickplay {
        interval: info.interval,
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn info() -> TrickplayInfo {
        TrickplayInfo {
            width: 4,
            height: 2,
            tile_width: 3,
            tile_height: 2,
            thumbnail_count: 8,
            interval: 1000,
            bandwidth: 0,
        }
    }

    /// Sheet where every cell is filled with its own index.
    fn sheet(info: &TrickplayInfo, first: u8) -> RgbaImage {
        RgbaImage::from_fn(
            info.width * info.tile_width,
            info.height * info.tile_height,
            |x, y| {
                let cell = (y / info.height) * info.tile_width + x / info.width;
                Rgba([first + cell as u8, 0, 0, 255])
            },
        )
    }

    #[test]
    fn test_split_is_row_major() {
        let info = info();
        let thumbnails = split_tile_sheet(&sheet(&info, 0), &info);
        assert_eq!(thumbnails.len(), 6);
        for (i, thumbnail) in thumbnails.iter().enumerate() {
            assert_eq!(thumbnail.dimensions(), (4, 2));
            assert_eq!(thumbnail.get_pixel(0, 0)[0], i as u8);
            assert_eq!(thumbnail.get_pixel(3, 1)[0], i as u8);
        }
    }

    #[test]
    fn test_partial_sheet_drops_missing_cells() {
        let info = info();
        // Only the first row, and two and a half columns of it.
        let cropped = imageops::crop_imm(&sheet(&info, 0), 0, 0, 10, 2).to_image();
        let thumbnails = split_tile_sheet(&cropped, &info);
        assert_eq!(thumbnails.len(), 2);
    }

    #[test]
    fn test_oversized_grid_only_cuts_fitting_cells() {
        let info = TrickplayInfo {
            width: 64,
            height: 18,
            tile_width: 60_000,
            tile_height: 60_000,
            thumbnail_count: 10,
            interval: 1000,
            bandwidth: 0,
        };
        let sheet = RgbaImage::new(640, 180);
        assert_eq!(split_tile_sheet(&sheet, &info).len(), 100);

        let trickplay = build_trickplay(&[sheet], &info);
        assert_eq!(trickplay.images.len(), 10);
    }

    #[test]
    fn test_build_caps_at_thumbnail_count() {
        let info = info();
        let trickplay = build_trickplay(&[sheet(&info, 0), sheet(&info, 6)], &info);
        assert_eq!(trickplay.images.len(), 8);
        assert_eq!(trickplay.interval, 1000);
        assert_eq!(trickplay.frame_at(7_500).unwrap().get_pixel(0, 0)[0], 7);
        assert!(trickplay.frame_at(8_000).is_none());
    }
}
