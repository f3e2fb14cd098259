//! # Mock catalog
//!
//! Hardcoded, read-only records built once on first access. Nothing here is ever
//! mutated; the session only holds clones or ids.

use std::sync::LazyLock;

use crate::models::{
    Education, IntakeForm, MatchDetails, MatchLevel, Major, Notification, NotificationKind,
    PortalTemplate, PricingPlan, Scholarship, SuccessCase, TemplateRecord,
};

use MatchLevel::{Match, Miss, Partial};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

struct Entry<'a> {
    id: u32,
    name: &'a str,
    university: &'a str,
    country: &'a str,
    amount: &'a str,
    deadline: &'a str,
    match_rate: u8,
    kind: &'a str,
    requirements: &'a [&'a str],
    description: &'a str,
    questions: &'a [&'a str],
    documents: &'a [&'a str],
    recommended: bool,
    applications: u32,
    views: u32,
    details: MatchDetails,
    eligibility: &'a str,
}

impl Entry<'_> {
    fn build(self) -> Scholarship {
        Scholarship {
            id: self.id,
            name: self.name.to_string(),
            university: self.university.to_string(),
            country: self.country.to_string(),
            amount: self.amount.to_string(),
            deadline: self.deadline.to_string(),
            match_rate: self.match_rate,
            kind: self.kind.to_string(),
            requirements: strings(self.requirements),
            description: self.description.to_string(),
            questions: strings(self.questions),
            required_documents: strings(self.documents),
            is_recommended: self.recommended,
            application_count: self.applications,
            view_count: self.views,
            match_details: self.details,
            eligibility_status: self.eligibility.to_string(),
        }
    }
}

const ELIGIBLE: &str = "你完全符合申请条件";

static SCHOLARSHIPS: LazyLock<Vec<Scholarship>> = LazyLock::new(|| {
    vec![
        Entry {
            id: 1,
            name: "全额学费奖学金",
            university: "斯坦福大学",
            country: "美国",
            amount: "$50,000/年",
            deadline: "2024年12月15日",
            match_rate: 95,
            kind: "全额奖学金",
            requirements: &["GPA 3.8+", "TOEFL 100+", "研究经历"],
            description: "面向优秀国际学生的全额学费奖学金，涵盖所有学费及生活补贴。",
            questions: &[
                "请描述您的研究兴趣和未来计划（500字以内）",
                "您认为自己最大的学术成就是什么？",
                "为什么选择我们学校？",
            ],
            documents: &["成绩单", "推荐信", "个人陈述", "研究计划"],
            recommended: true,
            applications: 234,
            views: 5600,
            details: MatchDetails {
                gpa: Match,
                language: Match,
                experience: Partial,
                background: Match,
            },
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 2,
            name: "优秀学生奖学金",
            university: "牛津大学",
            country: "英国",
            amount: "£25,000/年",
            deadline: "2025年1月31日",
            match_rate: 92,
            kind: "部分奖学金",
            requirements: &["GPA 3.6+", "IELTS 7.0+", "推荐信"],
            description: "奖励学术表现优异的国际学生，提供部分学费资助。",
            questions: &["请简述您的学术背景和专业技能", "您希望通过这个项目获得什么？"],
            documents: &["学位证明", "语言成绩", "推荐信"],
            recommended: true,
            applications: 189,
            views: 4200,
            details: MatchDetails {
                gpa: Match,
                language: Match,
                experience: Match,
                background: Partial,
            },
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 3,
            name: "研究生科研奖学金",
            university: "多伦多大学",
            country: "加拿大",
            amount: "CAD $30,000/年",
            deadline: "2024年11月30日",
            match_rate: 88,
            kind: "科研奖学金",
            requirements: &["相关专业背景", "研究计划", "导师推荐"],
            description: "专为从事科研工作的研究生设立，提供研究资金支持。",
            questions: &[
                "请详细描述您的研究计划",
                "您之前的研究经历是什么？",
                "您期望的导师是谁？为什么？",
            ],
            documents: &["研究计划书", "导师推荐信", "研究成果证明"],
            recommended: false,
            applications: 156,
            views: 3400,
            details: MatchDetails {
                gpa: Match,
                language: Partial,
                experience: Miss,
                background: Match,
            },
            eligibility: "研究经验略显不足，建议补充相关材料",
        }
        .build(),
        Entry {
            id: 4,
            name: "国际学生助学金",
            university: "悉尼大学",
            country: "澳大利亚",
            amount: "AUD $20,000/年",
            deadline: "2025年2月28日",
            match_rate: 85,
            kind: "助学金",
            requirements: &["经济需要证明", "学术成绩良好", "社区服务"],
            description: "帮助有经济困难的优秀国际学生完成学业。",
            questions: &["请说明您的经济状况", "您参与过哪些社区服务活动？"],
            documents: &["经济状况证明", "社区服务证明", "学术成绩单"],
            recommended: false,
            applications: 123,
            views: 2800,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 5,
            name: "工程学院奖学金",
            university: "麻省理工学院",
            country: "美国",
            amount: "$45,000/年",
            deadline: "2024年12月1日",
            match_rate: 82,
            kind: "专业奖学金",
            requirements: &["工程专业背景", "GPA 3.7+", "项目经历"],
            description: "专为工程学院学生设立的奖学金项目。",
            questions: &["描述您最具挑战性的工程项目", "您的工程职业目标是什么？"],
            documents: &["项目作品集", "成绩单", "推荐信"],
            recommended: false,
            applications: 90,
            views: 2200,
            details: MatchDetails {
                gpa: Match,
                language: Match,
                experience: Partial,
                background: Match,
            },
            eligibility: "GPA略低于要求，建议补充推荐信",
        }
        .build(),
        Entry {
            id: 6,
            name: "商学院精英奖学金",
            university: "伦敦商学院",
            country: "英国",
            amount: "£35,000/年",
            deadline: "2025年1月15日",
            match_rate: 80,
            kind: "商科奖学金",
            requirements: &["商科背景", "GMAT 700+", "工作经验"],
            description: "面向商学院优秀学生的奖学金。",
            questions: &["您的职业规划是什么？", "描述一次领导经历"],
            documents: &["GMAT成绩", "工作证明", "推荐信"],
            recommended: false,
            applications: 67,
            views: 1800,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 7,
            name: "艺术创新奖学金",
            university: "加州艺术学院",
            country: "美国",
            amount: "$28,000/年",
            deadline: "2025年3月15日",
            match_rate: 78,
            kind: "艺术奖学金",
            requirements: &["艺术作品集", "创意项目", "艺术背景"],
            description: "支持有创意才能的艺术学生。",
            questions: &["描述您的艺术风格和理念", "您最自豪的作品是什么？"],
            documents: &["作品集", "创意陈述", "推荐信"],
            recommended: false,
            applications: 54,
            views: 1500,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 8,
            name: "医学预科奖学金",
            university: "哈佛大学",
            country: "美国",
            amount: "$40,000/年",
            deadline: "2024年11月15日",
            match_rate: 76,
            kind: "医学奖学金",
            requirements: &["生物医学背景", "MCAT成绩", "志愿服务"],
            description: "为未来的医学生提供资助。",
            questions: &["为什么选择医学职业？", "描述您的志愿服务经历"],
            documents: &["MCAT成绩", "志愿服务证明", "推荐信"],
            recommended: false,
            applications: 41,
            views: 1200,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 9,
            name: "可持续发展奖学金",
            university: "苏黎世联邦理工学院",
            country: "瑞士",
            amount: "CHF 25,000/年",
            deadline: "2025年2月1日",
            match_rate: 74,
            kind: "环保奖学金",
            requirements: &["环境科学背景", "可持续项目经验", "语言能力"],
            description: "支持致力于可持续发展的学生。",
            questions: &["您对可持续发展的理解", "描述一个环保项目经历"],
            documents: &["项目报告", "语言证明", "推荐信"],
            recommended: false,
            applications: 38,
            views: 1000,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 10,
            name: "计算机科学奖学金",
            university: "卡内基梅隆大学",
            country: "美国",
            amount: "$38,000/年",
            deadline: "2024年12月20日",
            match_rate: 72,
            kind: "技术奖学金",
            requirements: &["CS背景", "编程能力", "技术项目"],
            description: "为计算机科学专业学生提供资助。",
            questions: &["描述您最复杂的编程项目", "您的技术发展方向是什么？"],
            documents: &["代码作品集", "项目文档", "推荐信"],
            recommended: false,
            applications: 35,
            views: 900,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 11,
            name: "国际关系奖学金",
            university: "巴黎政治学院",
            country: "法国",
            amount: "€22,000/年",
            deadline: "2025年1月20日",
            match_rate: 70,
            kind: "政治学奖学金",
            requirements: &["政治学背景", "多语言能力", "国际经验"],
            description: "培养国际关系专业人才。",
            questions: &["您对当前国际形势的看法", "描述一次跨文化交流经历"],
            documents: &["语言证书", "实习证明", "推荐信"],
            recommended: false,
            applications: 32,
            views: 800,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
        Entry {
            id: 12,
            name: "心理学研究奖学金",
            university: "剑桥大学",
            country: "英国",
            amount: "£24,000/年",
            deadline: "2025年2月10日",
            match_rate: 68,
            kind: "研究奖学金",
            requirements: &["心理学背景", "研究经验", "统计能力"],
            description: "支持心理学研究项目。",
            questions: &["您的研究兴趣领域", "描述一次研究经历"],
            documents: &["研究计划", "统计技能证明", "推荐信"],
            recommended: false,
            applications: 29,
            views: 700,
            details: MatchDetails::all(Match),
            eligibility: ELIGIBLE,
        }
        .build(),
    ]
});

/// The full scholarship catalog, ordered by id.
pub fn scholarships() -> &'static [Scholarship] {
    &SCHOLARSHIPS
}

pub fn find_scholarship(id: u32) -> Option<&'static Scholarship> {
    SCHOLARSHIPS.iter().find(|s| s.id == id)
}

/// The three cards shown on the home page.
pub fn featured_scholarships() -> Vec<Scholarship> {
    [1, 5, 6].iter().filter_map(|id| find_scholarship(*id)).cloned().collect()
}

static TEMPLATES: LazyLock<Vec<TemplateRecord>> = LazyLock::new(|| {
    let t = |id, title: &str, description: &str, kind: &str, category: &str, downloads, rating, is_premium, tags: &[&str], preview: &str| TemplateRecord {
        id,
        title: title.to_string(),
        description: description.to_string(),
        kind: kind.to_string(),
        category: category.to_string(),
        downloads,
        rating,
        is_premium,
        tags: strings(tags),
        preview: preview.to_string(),
    };
    vec![
        t(
            1,
            "个人陈述模板 - 商科申请",
            "适合商学院申请的个人陈述模板，包含结构指导和示例内容",
            "个人陈述",
            "商科",
            1234,
            4.8,
            false,
            &["商科", "MBA", "经典结构"],
            "我选择商科的原因源于对商业世界的深度思考...",
        ),
        t(
            2,
            "推荐信模板 - 导师推荐",
            "教授推荐信的标准模板，帮助导师更好地为你写推荐信",
            "推荐信",
            "通用",
            987,
            4.9,
            false,
            &["导师推荐", "学术", "研究生"],
            "作为XXX的导师，我很荣幸为他/她提供推荐...",
        ),
        t(
            3,
            "奖学金申请书 - STEM专业",
            "专为STEM专业设计的奖学金申请书模板",
            "申请书",
            "STEM",
            756,
            4.7,
            true,
            &["STEM", "理工科", "奖学金"],
            "在科技快速发展的今天，我深深感受到...",
        ),
        t(
            4,
            "CV模板 - 学术版",
            "适合学术申请的简历模板，突出研究经历和学术成果",
            "简历",
            "学术",
            2341,
            4.6,
            false,
            &["学术简历", "研究经历", "博士申请"],
            "个人信息\n姓名：XXX\n专业：XXX...",
        ),
        t(
            5,
            "研究计划书模板",
            "博士申请和研究型硕士必备的研究计划书模板",
            "研究计划",
            "学术",
            645,
            4.9,
            true,
            &["博士", "研究计划", "学术"],
            "研究背景与意义\n在XXX领域中...",
        ),
        t(
            6,
            "动机信模板 - 艺术类",
            "艺术类专业申请的动机信模板，强调创意和个人风格",
            "动机信",
            "艺术",
            432,
            4.5,
            true,
            &["艺术", "创意", "个人风格"],
            "艺术对我而言不仅仅是一种表达方式...",
        ),
    ]
});

pub fn templates() -> &'static [TemplateRecord] {
    &TEMPLATES
}

pub fn find_template(id: u32) -> Option<&'static TemplateRecord> {
    TEMPLATES.iter().find(|t| t.id == id)
}

/// Seed entries for the portal's notification center.
pub fn notifications() -> Vec<Notification> {
    let n = |id: &str, kind, title: &str, message: &str, date: &str, read, urgent| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        date: date.to_string(),
        read,
        urgent,
    };
    vec![
        n(
            "1",
            NotificationKind::Deadline,
            "截止日期提醒",
            "哈佛大学奖学金申请将在3天后截止，请尽快完成申请！",
            "2024-01-15",
            false,
            true,
        ),
        n(
            "2",
            NotificationKind::Status,
            "申请状态更新",
            "您的MIT奖学金申请状态已更新为\"审核中\"",
            "2024-01-14",
            false,
            false,
        ),
        n(
            "3",
            NotificationKind::Recommendation,
            "新奖学金推荐",
            "根据您的资料，我们为您推荐了2个新的奖学金项目",
            "2024-01-13",
            true,
            false,
        ),
        n(
            "4",
            NotificationKind::System,
            "资料完善提醒",
            "完善个人陈述可以提高申请成功率，当前完成度60%",
            "2024-01-12",
            true,
            false,
        ),
    ]
}

static PRICING_PLANS: LazyLock<Vec<PricingPlan>> = LazyLock::new(|| {
    let p = |id: &str, name: &str, price: &str, description: &str, features: &[&str], popular| PricingPlan {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
        period: "/月".to_string(),
        description: description.to_string(),
        features: strings(features),
        popular,
    };
    vec![
        p(
            "basic",
            "基础版",
            "¥59",
            "适合偶尔申请奖学金的用户",
            &["AI文书优化 5次/月", "基础模板库", "邮件提醒", "标准客服支持"],
            false,
        ),
        p(
            "premium",
            "高级版",
            "¥129",
            "最受欢迎的选择，功能全面",
            &[
                "AI文书优化 无限次",
                "高级模板库",
                "个性化推荐",
                "一对一指导",
                "优先客服支持",
                "成功案例分析",
            ],
            true,
        ),
        p(
            "pro",
            "专业版",
            "¥259",
            "适合需要专业指导的用户",
            &[
                "包含高级版所有功能",
                "专业导师一对一",
                "定制化申请策略",
                "面试辅导",
                "全程跟踪服务",
                "成功保障计划",
            ],
            false,
        ),
    ]
});

pub fn pricing_plans() -> &'static [PricingPlan] {
    &PRICING_PLANS
}

pub fn find_plan(id: &str) -> Option<&'static PricingPlan> {
    PRICING_PLANS.iter().find(|p| p.id == id)
}

pub fn success_cases() -> Vec<SuccessCase> {
    let c = |name: &str, scholarship: &str, amount: &str, major: &str, country: &str, year: &str| SuccessCase {
        name: name.to_string(),
        scholarship: scholarship.to_string(),
        amount: amount.to_string(),
        major: major.to_string(),
        country: country.to_string(),
        year: year.to_string(),
    };
    vec![
        c("李明", "哈佛大学全额奖学金", "$75,000", "计算机科学", "美国", "2024"),
        c("王小雅", "牛津大学Rhodes奖学金", "£60,000", "国际关系", "英国", "2024"),
        c("张浩然", "多伦多大学Lester B. Pearson奖学金", "$45,000", "工程学", "加拿大", "2023"),
        c("陈思妤", "澳洲国立大学校长奖学金", "AU$50,000", "商科", "澳大利亚", "2023"),
    ]
}

/// The short template list on the portal's profile tab.
pub fn portal_templates() -> Vec<PortalTemplate> {
    let t = |name: &str, description: &str, free, template_id| PortalTemplate {
        name: name.to_string(),
        description: description.to_string(),
        free,
        template_id,
    };
    vec![
        t("个人陈述模版", "标准个人陈述写作指南", true, Some(1)),
        t("推荐信模版", "推荐信请求和格式模版", true, Some(2)),
        t("简历模版", "学术简历标准格式", true, Some(4)),
        t("定制修改服务", "AI专业修改和优化服务", false, None),
    ]
}

/// What the mock résumé parser "extracts" from any accepted file.
pub fn resume_extraction() -> IntakeForm {
    IntakeForm {
        name: "张三".to_string(),
        education: Some(Education::Bachelor),
        gpa: "3.7".to_string(),
        major: Some(Major::ComputerScience),
        target_country: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<u32> = scholarships().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), scholarships().len());
        let ids: HashSet<u32> = templates().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), templates().len());
    }

    #[test]
    fn test_catalog_records_are_well_formed() {
        for s in scholarships() {
            assert!(s.match_rate <= 100, "{}", s.name);
            assert!(!s.questions.is_empty(), "{}", s.name);
            assert!(!s.required_documents.is_empty(), "{}", s.name);
            assert!(crate::derived::parse_deadline(&s.deadline).is_some(), "{}", s.deadline);
            assert!(crate::derived::parse_amount(&s.amount).is_some(), "{}", s.amount);
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_scholarship(6).map(|s| s.university.as_str()), Some("伦敦商学院"));
        assert!(find_scholarship(99).is_none());
        assert!(find_template(3).is_some_and(|t| t.is_premium));
        assert_eq!(find_plan("premium").map(|p| p.popular), Some(true));
        assert_eq!(featured_scholarships().len(), 3);
        assert_eq!(notifications().iter().filter(|n| !n.read).count(), 2);
    }

    #[test]
    fn test_portal_templates_resolve_to_free_catalog_entries() {
        for entry in portal_templates() {
            match entry.template_id {
                Some(id) => {
                    let template = find_template(id).unwrap();
                    assert!(entry.free && !template.is_premium, "{}", entry.name);
                }
                None => assert!(!entry.free, "{}", entry.name),
            }
        }
    }
}
