use std::fs;
use std::path::Path;

use crate::board::{Board, Tile};

/// Parse a text grid like `"1,2,3/4,_,5/7,8,6"`: rows separated by
/// `/`, cells by `,`, the blank written `_` (`.` and `0` are accepted
/// too).
pub fn parse_board(s: &str) -> Result<Board, String> {
    let mut rows: Vec<Vec<Option<Tile>>> = Vec::new();
    for (row_no, row) in s.trim().split('/').enumerate() {
        let mut cells: Vec<Option<Tile>> = Vec::new();
        for tok in row.split(',') {
            let tok = tok.trim();
            match tok {
                "_" | "." | "0" => cells.push(None),
                _ => {
                    let tile: Tile = tok
                        .parse()
                        .map_err(|e| format!("Invalid tile '{tok}' in row {row_no}: {e}"))?;
                    cells.push(Some(tile));
                }
            }
        }
        rows.push(cells);
    }
    Board::from_rows(&rows).map_err(|e| format!("Invalid board: {e}"))
}

/// Load a board from a JSON file (runtime), e.g.
/// `{"width":3,"height":3,"cells":[1,2,3,4,5,6,7,8,null]}`.
/// Deserialization re-validates the tile invariant.
pub fn load_board_from_json<P: AsRef<Path>>(path: P) -> Result<Board, String> {
    let data =
        fs::read_to_string(path.as_ref()).map_err(|e| format!("Failed to read JSON: {e}"))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse JSON: {e}"))
}
