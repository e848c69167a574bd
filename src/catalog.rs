use crate::models::Course;

/// Start hours offered for both class types.
pub const AVAILABLE_HOURS: [u8; 5] = [19, 20, 21, 22, 23];

pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.id == id)
}

pub static COURSES: [Course; 10] = [
    Course {
        id: "l1",
        level: "Level 1",
        title: "AI 视频认知框架",
        summary: "核心目标：建立对 AI 视频生成的整体认知，理解主流工具的能力边界与适用场景。",
        details: &[
            "AI 视频行业现状与商业机会梳理",
            "文生视频、图生视频、视频生视频的原理与区别",
            "主流平台横向对比：可灵、即梦、Runway、Pika、Sora",
            "搭建个人素材库与项目文件夹规范",
        ],
        tags: &["入门", "认知", "工具选型"],
    },
    Course {
        id: "l2",
        level: "Level 2",
        title: "提示词工程与画面描述",
        summary: "核心目标：掌握结构化提示词写法，让模型稳定输出你想要的画面。",
        details: &[
            "主体、动作、场景、光线、镜头五要素拆解",
            "风格词库与负面提示词的使用",
            "中英文提示词差异及翻译技巧",
            "用大语言模型辅助批量生成提示词",
        ],
        tags: &["提示词", "Prompt", "画面控制"],
    },
    Course {
        id: "l3",
        level: "Level 3",
        title: "AI 图像生成与角色设定",
        summary: "核心目标：用 AI 绘图完成角色设定与关键帧，为视频生成打好基础。",
        details: &[
            "Midjourney 与 Stable Diffusion 基础工作流",
            "角色三视图与表情包设定",
            "保持角色一致性的参考图技巧",
            "关键帧构图与分镜草图",
        ],
        tags: &["绘图", "角色一致性", "关键帧"],
    },
    Course {
        id: "l4",
        level: "Level 4",
        title: "图生视频与运镜控制",
        summary: "核心目标：把静态画面变成可用镜头，掌握常用运镜与动态控制。",
        details: &[
            "推拉摇移跟等基础运镜的提示方法",
            "首尾帧控制与动态笔刷",
            "常见画面崩坏的原因与修复思路",
            "镜头时长与节奏的把控",
        ],
        tags: &["图生视频", "运镜", "镜头语言"],
    },
    Course {
        id: "l5",
        level: "Level 5",
        title: "AI 配音、音乐与音效",
        summary: "核心目标：为作品配上可商用的声音，完成视听一体的成片。",
        details: &[
            "AI 配音与声音克隆的流程与版权注意事项",
            "AI 作曲工具生成背景音乐",
            "音效素材的生成与匹配",
            "口型同步与数字人基础",
        ],
        tags: &["配音", "音乐", "口型同步"],
    },
    Course {
        id: "l6",
        level: "Level 6",
        title: "剪辑包装与后期调色",
        summary: "核心目标：用剪辑软件把零散镜头组织成完整叙事，并统一画面质感。",
        details: &[
            "剪映与 Premiere 的高效剪辑流程",
            "转场、字幕与动态包装",
            "AI 超分、补帧与画质增强",
            "统一色调的调色思路",
        ],
        tags: &["剪辑", "后期", "调色"],
    },
    Course {
        id: "l7",
        level: "Level 7",
        title: "短片剧本与分镜设计",
        summary: "核心目标：从一个想法出发写出可拍的剧本，并拆解为 AI 可执行的分镜。",
        details: &[
            "短片结构与三幕式叙事",
            "用大语言模型辅助剧本创作",
            "分镜表的格式与镜头编号规范",
            "从分镜到提示词的批量转换",
        ],
        tags: &["剧本", "分镜", "叙事"],
    },
    Course {
        id: "l8",
        level: "Level 8",
        title: "商业广告片实战",
        summary: "核心目标：按照甲方需求完成一支 AI 商业广告，熟悉商业项目交付流程。",
        details: &[
            "需求沟通与创意提案",
            "产品一致性与品牌元素的保持",
            "15 秒与 30 秒广告的节奏设计",
            "修改意见的处理与版本管理",
        ],
        tags: &["商业", "广告", "交付"],
    },
    Course {
        id: "l9",
        level: "Level 9",
        title: "多平台内容运营与变现",
        summary: "核心目标：把作品发布到合适的平台，建立个人作品集与接单渠道。",
        details: &[
            "抖音、小红书、B站的内容差异",
            "账号定位与作品集包装",
            "接单平台与报价方法",
            "AI 内容的平台规则与风险",
        ],
        tags: &["运营", "变现", "多平台"],
    },
    Course {
        id: "l10",
        level: "Level 10",
        title: "导演级全流程整合",
        summary: "核心目标：独立完成从剧本到成片的完整 AI 短片，达到可投稿、可商用的水准。",
        details: &[
            "个人项目立项与制作计划",
            "全流程工具链的串联与提效",
            "作业点评与一对一修改建议",
            "结课作品展映与复盘",
        ],
        tags: &["全流程", "导演", "结课作品"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn course_ids_are_unique() {
        let ids: HashSet<_> = COURSES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), COURSES.len());
    }

    #[test]
    fn every_course_has_content() {
        for course in COURSES.iter() {
            assert!(!course.title.is_empty(), "{} has no title", course.id);
            assert!(!course.details.is_empty(), "{} has no details", course.id);
            assert!(!course.tags.is_empty(), "{} has no tags", course.id);
        }
    }

    #[test]
    fn find_course_by_id() {
        assert_eq!(find_course("l3").map(|c| c.level), Some("Level 3"));
        assert!(find_course("l42").is_none());
    }
}
