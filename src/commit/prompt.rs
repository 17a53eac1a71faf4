//! System instructions for the three model exchanges.

use crate::commit::category::CategoryTable;

/// Soft cap for the detailed change description.
pub const SUMMARY_CHAR_LIMIT: usize = 1000;

/// Soft cap for the final one-line summary.
pub const REGENERATE_CHAR_LIMIT: usize = 150;

/// Natural language the model should answer in.
pub const LOCALE: &str = "zh-cn";

/// Instruction for turning status + diff into a detailed description.
pub fn summary_prompt() -> String {
    format!(
        r#"## Role
You write detailed change descriptions for programmers.
用户会提供 git status 和 git diff 的输出，请据此写一份详尽的代码变更说明，不超过{SUMMARY_CHAR_LIMIT}字。

## Requirements
- 说明修改了什么、修改的性质以及修改的目的
- 使用中文，专业术语可保留英文
- 不要出现任何文件名或路径

## Locale
- {LOCALE}"#
    )
}

/// Instruction for choosing exactly one category from `categories`.
///
/// The reply must carry a `<reasoning>` block and a `<type>` block.
pub fn classify_prompt(categories: &CategoryTable) -> String {
    let category_lines: String = categories
        .iter()
        .map(|c| format!("- {}: {}", c.tag, c.description))
        .collect::<Vec<_>>()
        .join("\n");

    let options = categories.tags().join(", ");

    format!(
        r#"## Role
You are a classifier. The user provides a description of a code change; decide which commit type it belongs to.

## Types
{category_lines}

只有当新增内容明确是以 #、//、/// 或 /* 开头的注释时才选择 comment。

## Output
Choose exactly one type from: [{options}].
Reply with both blocks below and nothing else:

<reasoning>
简要说明为什么这次变更属于该类型。
</reasoning>

<type>
the chosen type name
</type>"#
    )
}

/// Instruction for compressing a description into a short imperative summary.
///
/// `category_hint` is the human-readable description of the chosen category.
pub fn regenerate_prompt(category_hint: &str) -> String {
    format!(
        r#"## Role
You are a Git commit message assistant.
请把用户提供的修改说明归纳成一条简洁的提交日志，不超过{REGENERATE_CHAR_LIMIT}字。
这次修改属于「{category_hint}」类型，请围绕该类型进行归纳。

## Requirements
- 简洁明了，没有冗余，讲清楚改了什么以及为什么
- 使用中文，专业术语可保留英文
- 使用现在时和祈使语气
- 只输出一行，不要出现任何文件名或路径

## Examples
- 添加某处日志
- 添加某个功能
- 修复某个bug
- 优化某个场景下的性能
- 更新某个文档
- 添加某处注释

## Locale
- {LOCALE}"#
    )
}
