//! アップロードのドロップゾーン

/// ファイル未選択時のラベル
pub const FILE_PLACEHOLDER: &str = "ファイルを選択するか、ドラッグ&ドロップしてください。";

/// ドラッグ操作のイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

/// ドロップゾーンの見た目の状態（アクティブ/非アクティブ）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropZone {
    active: bool,
}

impl DropZone {
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントを反映し、反映後のアクティブ状態を返す
    pub fn apply(&mut self, phase: DragPhase) -> bool {
        self.active = matches!(phase, DragPhase::Enter | DragPhase::Over);
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// 表示ラベル: 先頭ファイル名、なければプレースホルダ
pub fn file_label(first_name: Option<&str>) -> String {
    match first_name {
        Some(name) => name.to_string(),
        None => FILE_PLACEHOLDER.to_string(),
    }
}
